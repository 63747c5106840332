//! Error types for the login form library.
//!
//! None of these reach the user directly. Validation, rejection and
//! connectivity problems are reported through
//! [`crate::domain::entities::SubmitOutcome`] and the error container; the
//! types here cover wiring and storage faults.

use std::path::PathBuf;

/// The page does not contain an element the controller needs.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("required element `{0}` is missing from the page")]
    MissingElement(&'static str),
}

/// Session storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session file {path} could not be accessed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session file {path} is not a JSON object: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("session entries for {path} could not be encoded: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The navigator could not resolve the target location.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("cannot navigate to `{path}`: {source}")]
    InvalidLocation {
        path: String,
        #[source]
        source: url::ParseError,
    },
}

/// Failures after the server accepted the credentials.
#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

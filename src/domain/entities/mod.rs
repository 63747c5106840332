//! Core data structures of the login form.
//!
//! All of these are transient: they live for one page load and nothing here is
//! persisted except the [`AuthResult`] copy written into session storage.

pub mod auth_result;
pub mod credentials;
pub mod element;
pub mod form_state;
pub mod outcome;
pub mod visibility;

pub use auth_result::AuthResult;
pub use credentials::{Credentials, ValidationFailure};
pub use element::Element;
pub use form_state::FormState;
pub use outcome::{HandlerOutcome, LoginOutcome, SubmitOutcome};
pub use visibility::PasswordVisibility;

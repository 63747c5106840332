//! Results of the login request and of each form handler.

use super::{AuthResult, FormState, PasswordVisibility, ValidationFailure};
use url::Url;

/// Result of a single `/login` request.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// 2xx status with a JSON body.
    Authenticated(AuthResult),

    /// Non-2xx status. `detail` is the server's message, if it sent a usable one.
    Rejected { status: u16, detail: Option<String> },

    /// The request did not complete or the response could not be read.
    Unreachable(String),
}

/// What a submit attempt ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Stopped by client-side validation; no request was sent.
    Invalid(ValidationFailure),

    /// Session written and page navigated to `location`.
    LoggedIn { location: Url },

    /// The server refused the credentials.
    Rejected { status: u16, message: String },

    /// The server could not be reached, or the session could not be stored.
    Unreachable { message: String },

    /// Dropped because another submit was still in flight.
    Ignored,
}

impl SubmitOutcome {
    /// Text left in the error container, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid(failure) => Some(failure.message()),
            Self::Rejected { message, .. } | Self::Unreachable { message } => {
                Some(message.as_str())
            }
            Self::LoggedIn { .. } | Self::Ignored => None,
        }
    }
}

/// Return value of [`crate::application::services::LoginFormController::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerOutcome {
    FieldChanged(FormState),
    Submitted(SubmitOutcome),
    Toggled(PasswordVisibility),
}

//! Login request payload and its client-side validation.

use crate::domain::email::is_valid_email;
use crate::domain::messages;
use serde::Serialize;
use std::fmt;
use validator::{Validate, ValidationError};

/// Error code attached to empty-field validation failures.
const REQUIRED: &str = "required";

/// Trimmed email/password pair sent as the `/login` JSON body.
///
/// Serializes to `{"email": ..., "password": ...}`.
#[derive(Clone, PartialEq, Eq, Serialize, Validate)]
pub struct Credentials {
    #[validate(
        length(min = 1, code = "required"),
        custom(function = "validate_email_shape")
    )]
    pub email: String,

    #[validate(length(min = 1, code = "required"))]
    pub password: String,
}

/// Why a submit attempt was stopped before reaching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("{}", messages::FILL_ALL_FIELDS)]
    MissingFields,

    #[error("{}", messages::INVALID_EMAIL)]
    InvalidEmail,
}

impl ValidationFailure {
    /// Text shown in the error container.
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingFields => messages::FILL_ALL_FIELDS,
            Self::InvalidEmail => messages::INVALID_EMAIL,
        }
    }
}

impl Credentials {
    /// Trims both fields and validates them.
    ///
    /// Empty fields are reported before a malformed email, so an empty email
    /// always yields [`ValidationFailure::MissingFields`].
    ///
    /// # Errors
    ///
    /// Returns the first failing [`ValidationFailure`].
    pub fn parse(email: &str, password: &str) -> Result<Self, ValidationFailure> {
        let credentials = Self {
            email: email.trim().to_owned(),
            password: password.trim().to_owned(),
        };

        match credentials.validate() {
            Ok(()) => Ok(credentials),
            Err(errors) => {
                let missing = errors
                    .field_errors()
                    .values()
                    .flat_map(|errs| errs.iter())
                    .any(|e| e.code == REQUIRED);

                if missing {
                    Err(ValidationFailure::MissingFields)
                } else {
                    Err(ValidationFailure::InvalidEmail)
                }
            }
        }
    }
}

// Passwords never reach logs through `{:?}`.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

fn validate_email_shape(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email_shape"))
    }
}

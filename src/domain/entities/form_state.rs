//! Snapshot of the two input fields and the submit control they drive.

/// State derived from the email and password inputs on every field change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub email: String,
    pub password: String,
    pub submit_enabled: bool,
}

impl FormState {
    /// Trims both raw values and enables submit iff neither is empty.
    pub fn from_fields(email: &str, password: &str) -> Self {
        let email = email.trim().to_owned();
        let password = password.trim().to_owned();
        let submit_enabled = !email.is_empty() && !password.is_empty();

        Self {
            email,
            password,
            submit_enabled,
        }
    }
}

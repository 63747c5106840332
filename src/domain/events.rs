//! Events the login form reacts to.

/// The form's submit event.
///
/// Handlers call [`SubmitEvent::prevent_default`] to stop the browser's own
/// form navigation.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// The closed set of events the controller handles.
#[derive(Debug)]
pub enum FormEvent {
    /// Input in the email or password field.
    FieldChanged,
    /// Form submission.
    FormSubmitted(SubmitEvent),
    /// Click on the password visibility toggle.
    ToggleClicked,
}

//! Element lookup on the hosting page.

use crate::domain::entities::Element;

/// Read access to the page's elements.
///
/// Only lookups are needed: the controller resolves its elements once when it
/// binds and then works through the returned handles.
pub trait Document: Send + Sync {
    /// Looks up an element by its `id` attribute (without the leading `#`).
    fn get_element_by_id(&self, id: &str) -> Option<Element>;

    /// Looks up the first element matching `selector`.
    ///
    /// Implementations are only required to support the selectors they
    /// registered elements under.
    fn query_selector(&self, selector: &str) -> Option<Element>;
}

/// Element lookups the login form requires, each matching exactly one element.
pub mod selectors {
    pub const FORM_ID: &str = "login-form";
    pub const EMAIL_ID: &str = "email";
    pub const PASSWORD_ID: &str = "password";
    pub const ERROR_ID: &str = "error-message";
    pub const SUBMIT_BUTTON: &str = "#login-form button";
    pub const PASSWORD_TOGGLE: &str = ".toggle-password";
}

//! Headless page for tests and the terminal client.

use std::collections::HashMap;

use crate::domain::entities::Element;
use crate::domain::messages::GLYPH_MASKED;
use crate::domain::ports::Document;
use crate::domain::ports::document::selectors;

/// A page whose elements are registered by selector.
///
/// Elements registered under `#id` are also found by
/// [`Document::get_element_by_id`].
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: HashMap<String, Element>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// The login page markup: form, both inputs, the submit button, the error
    /// container and the password toggle showing the masked glyph.
    pub fn login_page() -> Self {
        Self::new()
            .with_element(&format!("#{}", selectors::FORM_ID), Element::new())
            .with_element(&format!("#{}", selectors::EMAIL_ID), Element::input("email"))
            .with_element(&format!("#{}", selectors::PASSWORD_ID), Element::input("password"))
            .with_element(selectors::SUBMIT_BUTTON, Element::new())
            .with_element(&format!("#{}", selectors::ERROR_ID), Element::new())
            .with_element(selectors::PASSWORD_TOGGLE, Element::with_text(GLYPH_MASKED))
    }

    /// Registers `element` under `selector`, replacing any previous one.
    pub fn with_element(mut self, selector: &str, element: Element) -> Self {
        self.elements.insert(selector.to_owned(), element);
        self
    }

    /// Removes the element registered under `selector`.
    pub fn without(mut self, selector: &str) -> Self {
        self.elements.remove(selector);
        self
    }
}

impl Document for MemoryDocument {
    fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.elements.get(&format!("#{id}")).cloned()
    }

    fn query_selector(&self, selector: &str) -> Option<Element> {
        self.elements.get(selector).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_page_has_every_element() {
        let page = MemoryDocument::login_page();

        for id in ["login-form", "email", "password", "error-message"] {
            assert!(page.get_element_by_id(id).is_some(), "missing #{id}");
        }
        assert!(page.query_selector("#login-form button").is_some());
        assert!(page.query_selector(".toggle-password").is_some());
    }

    #[test]
    fn test_login_page_initial_attributes() {
        let page = MemoryDocument::login_page();

        let password = page.get_element_by_id("password").unwrap();
        assert_eq!(password.input_type().as_deref(), Some("password"));

        let toggle = page.query_selector(".toggle-password").unwrap();
        assert_eq!(toggle.text_content(), "👁️");
    }

    #[test]
    fn test_lookups_return_shared_handles() {
        let page = MemoryDocument::login_page();

        page.get_element_by_id("email").unwrap().set_value("user@example.com");
        assert_eq!(
            page.query_selector("#email").unwrap().value(),
            "user@example.com"
        );
    }

    #[test]
    fn test_without_removes_element() {
        let page = MemoryDocument::login_page().without(".toggle-password");
        assert!(page.query_selector(".toggle-password").is_none());
    }
}

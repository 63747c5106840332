//! Shared handle to a single page element.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct ElementState {
    value: String,
    input_type: Option<String>,
    disabled: bool,
    text_content: String,
}

/// A cloneable handle to a page element.
///
/// Clones share state, the way two references to the same DOM node do: a
/// value typed through one handle is visible through every other.
#[derive(Debug, Clone, Default)]
pub struct Element {
    state: Arc<RwLock<ElementState>>,
}

impl Element {
    /// Element without input semantics (forms, containers, toggles).
    pub fn new() -> Self {
        Self::default()
    }

    /// `<input type="...">` element.
    pub fn input(input_type: &str) -> Self {
        let element = Self::new();
        element.set_input_type(input_type);
        element
    }

    /// Element created with initial text content.
    pub fn with_text(text: &str) -> Self {
        let element = Self::new();
        element.set_text_content(text);
        element
    }

    pub fn value(&self) -> String {
        self.read().value.clone()
    }

    pub fn set_value(&self, value: &str) {
        self.write().value = value.to_owned();
    }

    /// The `type` attribute, if any.
    pub fn input_type(&self) -> Option<String> {
        self.read().input_type.clone()
    }

    pub fn set_input_type(&self, input_type: &str) {
        self.write().input_type = Some(input_type.to_owned());
    }

    pub fn is_disabled(&self) -> bool {
        self.read().disabled
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.write().disabled = disabled;
    }

    pub fn text_content(&self) -> String {
        self.read().text_content.clone()
    }

    /// Replaces the text content. Never appends.
    pub fn set_text_content(&self, text: &str) {
        self.write().text_content = text.to_owned();
    }

    fn read(&self) -> RwLockReadGuard<'_, ElementState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ElementState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let element = Element::input("email");
        let alias = element.clone();

        alias.set_value("user@example.com");
        assert_eq!(element.value(), "user@example.com");

        element.set_disabled(true);
        assert!(alias.is_disabled());
    }

    #[test]
    fn test_text_content_is_replaced() {
        let element = Element::with_text("first");
        element.set_text_content("second");
        assert_eq!(element.text_content(), "second");
    }

    #[test]
    fn test_input_type() {
        let element = Element::new();
        assert_eq!(element.input_type(), None);

        element.set_input_type("password");
        assert_eq!(element.input_type().as_deref(), Some("password"));
    }
}

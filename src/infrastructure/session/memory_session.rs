//! In-process session storage.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::domain::ports::SessionStore;
use crate::error::StoreError;

/// Session storage backed by a map. Never fails.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStore for MemorySessionStore {
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = MemorySessionStore::new();
        assert!(store.is_empty());

        store.set_item("isAuthenticated", "true").unwrap();
        assert_eq!(
            store.get_item("isAuthenticated").unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(store.get_item("userData").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemorySessionStore::new();
        store.set_item("userData", "{}").unwrap();
        store.set_item("userData", r#"{"id":1}"#).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get_item("userData").unwrap().as_deref(),
            Some(r#"{"id":1}"#)
        );
    }

    #[test]
    fn test_clear() {
        let store = MemorySessionStore::new();
        store.set_item("a", "1").unwrap();
        store.set_item("b", "2").unwrap();
        store.clear().unwrap();
        assert!(store.is_empty());
    }
}

//! Session-scoped key-value storage.

use crate::error::StoreError;

/// String-to-string storage that lives as long as the user's session.
///
/// The login controller only ever calls [`SessionStore::set_item`]; the other
/// methods exist for the pages and tools that consume the session.
///
/// # Implementations
///
/// - [`crate::infrastructure::session::MemorySessionStore`] - In-process map
/// - [`crate::infrastructure::session::FileSessionStore`] - JSON file on disk
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Reads the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Removes every key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn clear(&self) -> Result<(), StoreError>;
}

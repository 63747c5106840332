//! Session storage persisted as a JSON object file.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::domain::ports::SessionStore;
use crate::error::StoreError;

/// Session storage kept in a single JSON file of string values.
///
/// A missing file is an empty session. Every write rewrites the whole file;
/// writes from one store instance are serialized.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored entries, ordered by key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be read or parsed.
    pub fn entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, contents).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl SessionStore for FileSessionStore {
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut entries = self.entries()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.write_entries(&entries)?;

        debug!(path = %self.path.display(), key, "Session item stored");
        Ok(())
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries()?.remove(key))
    }

    fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "login-form-{}-{}.json",
            std::process::id(),
            name
        ));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_missing_file_is_empty_session() {
        let store = FileSessionStore::new(temp_path("missing"));
        assert!(store.entries().unwrap().is_empty());
        assert_eq!(store.get_item("isAuthenticated").unwrap(), None);
    }

    #[test]
    fn test_set_item_persists_across_instances() {
        let path = temp_path("persist");
        let store = FileSessionStore::new(&path);
        store.set_item("isAuthenticated", "true").unwrap();
        store.set_item("userData", r#"{"id":1,"name":"Ana"}"#).unwrap();

        let reopened = FileSessionStore::new(&path);
        assert_eq!(
            reopened.get_item("userData").unwrap().as_deref(),
            Some(r#"{"id":1,"name":"Ana"}"#)
        );
        assert_eq!(reopened.entries().unwrap().len(), 2);

        reopened.clear().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json").unwrap();

        let store = FileSessionStore::new(&path);
        let err = store.set_item("isAuthenticated", "true").unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_encode_failure_is_not_reported_as_corrupt_file() {
        let path = temp_path("encode");
        let source = serde_json::from_str::<String>("1").unwrap_err();
        let err = StoreError::Encode { path: path.clone(), source };

        let message = err.to_string();
        assert!(message.contains("could not be encoded"));
        assert!(!message.contains("is not a JSON object"));
    }

    #[test]
    fn test_clear_without_file() {
        let store = FileSessionStore::new(temp_path("clear"));
        assert!(store.clear().is_ok());
    }
}

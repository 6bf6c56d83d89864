//! Key-value persistence for user preferences (browser local storage).

use contracts::shared::preferences::Preference;
use thiserror::Error;
use web_sys::window;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to write key {0}")]
    WriteFailed(String),
}

/// String key-value storage.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`. Reads yield nothing and writes fail softly when
/// storage is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }
}

/// Typed access to preferences kept in a [`KeyValueStorage`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferenceStore<S> {
    storage: S,
}

impl PreferenceStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStorage> PreferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persisted value, `None` when nothing (usable) is stored.
    pub fn load<P: Preference>(&self) -> Option<P> {
        self.storage
            .get_item(P::KEY)
            .and_then(|raw| P::decode(&raw))
    }

    /// Persist synchronously. Failures are logged and otherwise ignored.
    pub fn save<P: Preference>(&self, value: &P) {
        if let Err(e) = self.storage.set_item(P::KEY, &value.encode()) {
            log::warn!("preference {} not saved: {e}", P::KEY);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use contracts::shared::preferences::{SidebarCollapsed, Theme};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory storage shared between store instances, standing in for a
    /// page reload over the same local storage.
    #[derive(Clone, Default)]
    pub(crate) struct MemoryStorage(Rc<RefCell<HashMap<String, String>>>);

    impl KeyValueStorage for MemoryStorage {
        fn get_item(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Option<String> {
            None
        }

        fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed(key.to_string()))
        }
    }

    #[test]
    fn test_absent_value_keeps_default() {
        let store = PreferenceStore::new(MemoryStorage::default());
        assert_eq!(store.load::<Theme>(), None);
        assert_eq!(store.load::<SidebarCollapsed>(), None);
    }

    #[test]
    fn test_theme_survives_reload() {
        for is_dark in [true, false] {
            let storage = MemoryStorage::default();
            PreferenceStore::new(storage.clone()).save(&Theme::from_is_dark(is_dark));

            let reloaded = PreferenceStore::new(storage.clone());
            assert_eq!(reloaded.load::<Theme>().map(|t| t.is_dark()), Some(is_dark));
            assert_eq!(
                storage.get_item("theme").as_deref(),
                Some(if is_dark { "dark" } else { "light" })
            );
        }
    }

    #[test]
    fn test_sidebar_survives_reload() {
        let storage = MemoryStorage::default();
        PreferenceStore::new(storage.clone()).save(&SidebarCollapsed(true));
        assert_eq!(storage.get_item("sidebarCollapsed").as_deref(), Some("true"));
        assert_eq!(
            PreferenceStore::new(storage).load::<SidebarCollapsed>(),
            Some(SidebarCollapsed(true))
        );
    }

    #[test]
    fn test_write_failure_is_soft() {
        let store = PreferenceStore::new(ReadOnlyStorage);
        store.save(&Theme::Dark);
        assert_eq!(store.load::<Theme>(), None);
    }
}

//! Persisted key-value preferences.
//!
//! The table remembers its sort column and direction across sessions through
//! a [`PreferenceStore`], injected by the embedding application.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use autolist_domain::automation::AutomationField;
use autolist_domain::query::SortOrder;
use autolist_domain::query::params::{parse_order, parse_sort_field};

use crate::error::PreferenceError;

/// Key holding the remembered sort column.
pub const SORT_BY_KEY: &str = "autolist.sortBy";
/// Key holding the remembered sort direction.
pub const ORDER_KEY: &str = "autolist.order";

/// A process-wide string key-value store.
pub trait PreferenceStore {
    /// Stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError`] when the value cannot be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        (**self).set(key, value)
    }
}

/// Read the remembered sort preference. Missing or unreadable values fall
/// back to "unsorted, ascending".
pub fn load_sort(store: &impl PreferenceStore) -> (Option<AutomationField>, SortOrder) {
    let sort_by = store
        .get(SORT_BY_KEY)
        .and_then(|raw| parse_sort_field(&raw).ok());
    let order = store
        .get(ORDER_KEY)
        .and_then(|raw| parse_order(&raw).ok())
        .unwrap_or_default();
    (sort_by, order)
}

/// Remember a sort preference.
///
/// # Errors
///
/// Returns the first [`PreferenceError`] raised by the store.
pub fn save_sort(
    store: &impl PreferenceStore,
    sort_by: AutomationField,
    order: SortOrder,
) -> Result<(), PreferenceError> {
    store.set(SORT_BY_KEY, sort_by.as_str())?;
    store.set(ORDER_KEY, order.as_str())
}

/// Volatile store, for tests and embedders without persistence.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object on disk, the native counterpart of a
/// browser's local storage.
///
/// Every call goes to disk; a missing file reads as empty.
#[derive(Debug)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFilePreferenceStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(source) => Err(PreferenceError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

/// Values to start a write from. A corrupt file is overwritten; any other
/// read failure aborts the write so existing keys are not lost.
fn writable(
    read: Result<BTreeMap<String, String>, PreferenceError>,
) -> Result<BTreeMap<String, String>, PreferenceError> {
    match read {
        Err(PreferenceError::Json(_)) => Ok(BTreeMap::new()),
        other => other,
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.read_all() {
            Ok(mut values) => values.remove(key),
            Err(err) => {
                tracing::debug!(
                    error = %err,
                    path = %self.path.display(),
                    "unreadable preference file"
                );
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut values = writable(self.read_all())?;
        values.insert(key.to_string(), value.to_string());
        let bytes = serde_json::to_vec_pretty(&values)?;
        std::fs::write(&self.path, bytes).map_err(|source| PreferenceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_when_nothing_stored() {
        let store = MemoryPreferenceStore::default();
        assert_eq!(load_sort(&store), (None, SortOrder::Asc));
    }

    #[test]
    fn should_roundtrip_sort_preference() {
        let store = MemoryPreferenceStore::default();
        save_sort(&store, AutomationField::CreationTime, SortOrder::Desc).unwrap();
        assert_eq!(store.get(SORT_BY_KEY).as_deref(), Some("creationTime"));
        assert_eq!(
            load_sort(&store),
            (Some(AutomationField::CreationTime), SortOrder::Desc)
        );
    }

    #[test]
    fn should_ignore_garbage_values() {
        let store = MemoryPreferenceStore::default();
        store.set(SORT_BY_KEY, "owner").unwrap();
        store.set(ORDER_KEY, "sideways").unwrap();
        assert_eq!(load_sort(&store), (None, SortOrder::Asc));
    }

    #[test]
    fn should_persist_across_file_store_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let first = JsonFilePreferenceStore::new(&path);
        save_sort(&first, AutomationField::Status, SortOrder::Desc).unwrap();

        let second = JsonFilePreferenceStore::new(&path);
        assert_eq!(
            load_sort(&second),
            (Some(AutomationField::Status), SortOrder::Desc)
        );
    }

    #[test]
    fn should_read_missing_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFilePreferenceStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get(SORT_BY_KEY), None);
    }

    #[test]
    fn should_overwrite_corrupt_file_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = JsonFilePreferenceStore::new(&path);
        assert_eq!(store.get(ORDER_KEY), None);
        store.set(ORDER_KEY, "desc").unwrap();
        assert_eq!(store.get(ORDER_KEY).as_deref(), Some("desc"));
    }

    #[test]
    fn should_abort_write_when_existing_file_cannot_be_read() {
        let io = PreferenceError::Io {
            path: PathBuf::from("prefs.json"),
            source: std::io::Error::new(std::io::ErrorKind::Interrupted, "busy"),
        };
        assert!(matches!(writable(Err(io)), Err(PreferenceError::Io { .. })));

        let corrupt = serde_json::from_str::<BTreeMap<String, String>>("{").unwrap_err();
        assert_eq!(writable(Err(corrupt.into())).unwrap(), BTreeMap::new());
    }

    #[test]
    fn should_keep_other_keys_when_writing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFilePreferenceStore::new(dir.path().join("prefs.json"));
        store.set("theme", "dark").unwrap();
        save_sort(&store, AutomationField::Name, SortOrder::Desc).unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn should_fail_write_when_path_is_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFilePreferenceStore::new(dir.path());
        let err = store.set(ORDER_KEY, "asc").unwrap_err();
        assert!(matches!(err, PreferenceError::Io { .. }));
    }

    #[test]
    fn should_report_io_error_when_directory_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFilePreferenceStore::new(dir.path().join("nested/prefs.json"));
        let err = store.set(ORDER_KEY, "asc").unwrap_err();
        assert!(matches!(err, PreferenceError::Io { .. }));
    }

    #[test]
    fn should_work_through_a_reference() {
        let store = MemoryPreferenceStore::default();
        let by_ref = &store;
        save_sort(&by_ref, AutomationField::Name, SortOrder::Asc).unwrap();
        assert_eq!(store.get(SORT_BY_KEY).as_deref(), Some("name"));
    }
}

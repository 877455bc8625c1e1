use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use business::domain::errors::StorageError;
use business::domain::storage::KeyValueStore;
use tracing::warn;

/// Key-value store backed by one file per key under a root directory.
/// The durable counterpart of the browser's local storage for desktop and
/// server environments.
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Creates the root directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|err| {
            warn!("Could not create storage directory: {err}");
            StorageError::Unavailable
        })?;
        Ok(Self { root })
    }

    /// Keys map directly to file names, so path-like keys are refused.
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty()
            || key == "."
            || key == ".."
            || key.contains(['/', '\\'])
            || key.contains('\0')
        {
            return Err(StorageError::InvalidKey);
        }
        Ok(self.root.join(key))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                warn!("Could not read {}: {err}", path.display());
                Err(StorageError::Io)
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::write(&path, value).map_err(|err| {
            warn!("Could not write {}: {err}", path.display());
            StorageError::Io
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => {
                warn!("Could not remove {}: {err}", path.display());
                Err(StorageError::Io)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_persist_values_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        let first = FileKeyValueStore::new(dir.path()).unwrap();
        first.set("cart", r#"[{"quantity":2}]"#).unwrap();

        let second = FileKeyValueStore::new(dir.path()).unwrap();
        assert_eq!(
            second.get("cart").unwrap().as_deref(),
            Some(r#"[{"quantity":2}]"#)
        );

        second.remove("cart").unwrap();
        assert_eq!(second.get("cart").unwrap(), None);
        // Removing a missing key stays a no-op.
        second.remove("cart").unwrap();
    }

    #[test]
    fn should_reject_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path()).unwrap();

        assert!(matches!(
            store.set("../escape", "x").unwrap_err(),
            StorageError::InvalidKey
        ));
        assert!(matches!(
            store.get("a/b").unwrap_err(),
            StorageError::InvalidKey
        ));
    }
}

//! Directory-backed [`KeyValueStore`]: one file per key.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::store::KeyValueStore;

const FILE_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.{FILE_EXTENSION}")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        // Readers never observe a partially written value.
        let tmp = path.with_extension(format!("{FILE_EXTENSION}.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_absent() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileStore::new(tmp.path().join("never-created"));
        assert_eq!(store.get("fsa-progress").unwrap(), None);
    }

    #[test]
    fn set_get_remove_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let mut store = FileStore::new(tmp.path().join("storage"));

        store.set("fsa-progress", r#"{"a":1}"#).unwrap();
        assert!(tmp.path().join("storage/fsa-progress.json").exists());
        assert_eq!(
            store.get("fsa-progress").unwrap().as_deref(),
            Some(r#"{"a":1}"#)
        );

        store.remove("fsa-progress").unwrap();
        store.remove("fsa-progress").unwrap();
        assert_eq!(store.get("fsa-progress").unwrap(), None);
    }

    #[test]
    fn rejects_path_like_keys() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let mut store = FileStore::new(tmp.path());
        for key in ["../escape", "a/b", "", ".hidden"] {
            assert!(matches!(
                store.set(key, "x"),
                Err(StorageError::InvalidKey(_))
            ));
        }
    }
}

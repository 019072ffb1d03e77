//! File-backed store: one file per key inside a data directory.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::{Backend, StorageError};

const EXTENSION: &str = "kv";

/// Durable store that keeps each key in its own file.
///
/// Writes go to a temporary file in the same directory and are persisted
/// over the key file, so a crash mid-write leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| StorageError::OpenError(format!("{}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    /// The directory holding the key files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", encode_key(key), EXTENSION))
    }
}

impl Backend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&path).map_err(|e| StorageError::Io(e.error))?;
        debug!(key, bytes = value.len(), path = %path.display(), "wrote key");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.path_for(key).is_file())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == EXTENSION) {
                if let Some(key) = path.file_stem().and_then(|s| s.to_str()).and_then(decode_key) {
                    keys.push(key);
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// Percent-encode the key so any key maps to a safe, reversible file name.
fn encode_key(key: &str) -> String {
    urlencoding::encode(key).into_owned()
}

fn decode_key(name: &str) -> Option<String> {
    urlencoding::decode(name).ok().map(|key| key.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();

        backend.set("cartItems", b"[]").unwrap();
        assert_eq!(backend.get("cartItems").unwrap(), Some(b"[]".to_vec()));

        let reopened = FileBackend::open(dir.path()).unwrap();
        assert_eq!(reopened.get("cartItems").unwrap(), Some(b"[]".to_vec()));
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        assert!(backend.get("nothing").unwrap().is_none());
        assert!(!backend.exists("nothing").unwrap());
        backend.delete("nothing").unwrap();
    }

    #[test]
    fn test_keys_are_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        backend.set("cart:guest/1", b"x").unwrap();
        backend.set("cartItems", b"y").unwrap();
        assert_eq!(backend.keys().unwrap(), vec!["cart:guest/1", "cartItems"]);
    }

    #[test]
    fn test_encode_key() {
        assert_eq!(encode_key("cartItems"), "cartItems");
        assert_eq!(encode_key("a:b"), "a%3Ab");
        assert_eq!(encode_key("cart/guest 1"), "cart%2Fguest%201");
        assert_eq!(decode_key("a%3Ab").as_deref(), Some("a:b"));
        assert_eq!(decode_key("%FF%FE"), None);
    }

    #[test]
    fn test_overwrite_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::open(dir.path()).unwrap();
        backend.set("cartItems", b"[1]").unwrap();
        backend.set("cartItems", b"[2]").unwrap();

        assert_eq!(backend.get("cartItems").unwrap(), Some(b"[2]".to_vec()));
        let files: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
        assert_eq!(backend.keys().unwrap(), vec!["cartItems"]);
    }

    #[test]
    fn test_open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("site").join("storage");
        let backend = FileBackend::open(&nested).unwrap();
        assert!(backend.dir().is_dir());
    }
}

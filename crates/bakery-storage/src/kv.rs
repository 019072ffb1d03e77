//! Typed store wrapper with automatic serialization.

use serde::{de::DeserializeOwned, Serialize};

use crate::{Backend, StorageError};

/// Type-safe store over any [`Backend`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Store<B> {
    backend: B,
}

impl<B: Backend> Store<B> {
    /// Wrap a backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist, and a
    /// [`StorageError::SerializeError`] if the payload doesn't decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the store, replacing any previous value.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(value)?;
        self.backend.set(key, &bytes)
    }

    /// Borrow the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBackend;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Line {
        name: String,
        quantity: u32,
    }

    #[test]
    fn test_typed_round_trip() {
        let store = Store::new(MemoryBackend::new());
        let lines = vec![Line {
            name: "Pretzel".to_string(),
            quantity: 2,
        }];
        store.set("cartItems", &lines).unwrap();

        let loaded: Option<Vec<Line>> = store.get("cartItems").unwrap();
        assert_eq!(loaded, Some(lines));
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = Store::new(MemoryBackend::new());
        let loaded: Option<Vec<Line>> = store.get("cartItems").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_malformed_payload_is_serialize_error() {
        let backend = MemoryBackend::new();
        backend.set("cartItems", b"{not json").unwrap();
        let store = Store::new(backend);

        let result: Result<Option<Vec<Line>>, _> = store.get("cartItems");
        assert!(matches!(result, Err(StorageError::SerializeError(_))));
    }
}

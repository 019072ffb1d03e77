//! Durable key-value storage for the bakery cart.
//!
//! The cart never reaches for ambient global storage. Callers hand it a
//! [`Backend`] capability instead, which keeps persistence swappable:
//!
//! - [`MemoryBackend`]: shared in-process map, used as the test stand-in
//!   (with an optional byte quota to simulate a full store)
//! - [`FileBackend`]: one file per key inside a data directory
//!
//! [`Store`] layers automatic JSON serialization on top of any backend.
//!
//! # Example
//!
//! ```rust
//! use bakery_storage::{MemoryBackend, Store};
//!
//! let store = Store::new(MemoryBackend::new());
//! store.set("cartItems", &vec!["Baguette"]).unwrap();
//!
//! let items: Option<Vec<String>> = store.get("cartItems").unwrap();
//! assert_eq!(items, Some(vec!["Baguette".to_string()]));
//! ```

mod backend;
mod error;
mod file;
mod kv;
mod memory;

pub use backend::Backend;
pub use error::StorageError;
pub use file::FileBackend;
pub use kv::Store;
pub use memory::MemoryBackend;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Backend, FileBackend, MemoryBackend, StorageError, Store};
}

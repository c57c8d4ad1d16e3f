//! Platform storage backends
//!
//! LocalStorage on web; native builds use the in-memory store.

#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;

use crate::persistence::KeyValueStore;

/// Best storage available on this platform
#[cfg(target_arch = "wasm32")]
pub fn default_store() -> Box<dyn KeyValueStore> {
    match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("{}; activities will not survive a reload", e);
            Box::new(crate::persistence::MemoryStore::new())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_store() -> Box<dyn KeyValueStore> {
    Box::new(crate::persistence::MemoryStore::new())
}

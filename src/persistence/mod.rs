//! Save/load of the activity list
//!
//! The list lives in a single key-value slot as a JSON array of records.
//! Every write overwrites the whole slot. A missing or unreadable slot loads
//! as an empty list rather than surfacing an error to the page.

mod memory;

pub use memory::MemoryStore;

use crate::activity::ActivityRecord;
use crate::error::StorageError;
use crate::list::ActivityList;

/// Synchronous string key-value storage, shaped like the Web Storage API
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// Parse slot content into records
pub fn decode(key: &str, json: &str) -> Result<Vec<ActivityRecord>, StorageError> {
    serde_json::from_str(json).map_err(|source| StorageError::Malformed {
        key: key.to_string(),
        source,
    })
}

/// Read the slot. `Ok(None)` when nothing has been stored yet.
pub fn try_load<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> Result<Option<Vec<ActivityRecord>>, StorageError> {
    match store.get_item(key)? {
        Some(json) => decode(key, &json).map(Some),
        None => Ok(None),
    }
}

/// Read the slot, falling back to an empty list on any failure
pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> ActivityList {
    match try_load(store, key) {
        Ok(Some(records)) => {
            log::info!("Loaded {} activities", records.len());
            ActivityList::from_records(records)
        }
        Ok(None) => {
            log::info!("No saved activities found, starting fresh");
            ActivityList::new()
        }
        Err(e) => {
            log::warn!("Ignoring saved activities: {}", e);
            ActivityList::new()
        }
    }
}

/// Overwrite the slot with the full list
pub fn save<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    list: &ActivityList,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(list)?;
    store.set_item(key, &json)?;
    log::info!("Activities saved ({} entries)", list.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityType;
    use crate::consts::STORAGE_KEY;

    fn sample() -> ActivityList {
        ActivityList::from_records([
            ActivityRecord::new("Read a book", 0.0, ActivityType::Education),
            ActivityRecord::new("Pottery class", 45.5, ActivityType::Diy)
                .with_booking(true)
                .with_accessibility(0.3),
            ActivityRecord::new("Read a book", 0.0, ActivityType::Education),
        ])
    }

    #[test]
    fn test_round_trip_preserves_order_and_values() {
        let store = MemoryStore::new();
        let list = sample();
        save(&store, STORAGE_KEY, &list).unwrap();

        let loaded = load(&store, STORAGE_KEY);
        let before: Vec<_> = list.records().cloned().collect();
        let after: Vec<_> = loaded.records().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_missing_slot_is_empty() {
        let store = MemoryStore::new();
        assert!(try_load(&store, STORAGE_KEY).unwrap().is_none());
        assert!(load(&store, STORAGE_KEY).is_empty());
    }

    #[test]
    fn test_malformed_slot_falls_back_to_empty() {
        let store = MemoryStore::new();
        for bad in ["not json", "{}", r#"[{"activity":"x"}]"#, "null"] {
            store.set_item(STORAGE_KEY, bad).unwrap();
            assert!(matches!(
                try_load(&store, STORAGE_KEY),
                Err(StorageError::Malformed { .. })
            ));
            assert!(load(&store, STORAGE_KEY).is_empty());
        }
    }

    #[test]
    fn test_reads_slot_written_by_browser() {
        // Integer numbers, as a browser's JSON.stringify writes them
        let store = MemoryStore::new();
        store
            .set_item(
                STORAGE_KEY,
                r#"[{"activity":"Learn a chord","price":0,"type":"music","bookingRequired":false,"accessibility":1}]"#,
            )
            .unwrap();

        let list = load(&store, STORAGE_KEY);
        assert_eq!(list.len(), 1);
        let record = list.get(0).unwrap();
        assert_eq!(record.kind, ActivityType::Music);
        assert_eq!(record.accessibility, 1.0);
    }

    #[test]
    fn test_save_overwrites() {
        let store = MemoryStore::new();
        save(&store, STORAGE_KEY, &sample()).unwrap();
        save(&store, STORAGE_KEY, &ActivityList::new()).unwrap();
        assert_eq!(store.get_item(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_unavailable_store_loads_empty() {
        struct Broken;
        impl KeyValueStore for Broken {
            fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
                Err(StorageError::Unavailable("disabled".into()))
            }
            fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
                Err(StorageError::Write {
                    key: key.into(),
                    message: "quota exceeded".into(),
                })
            }
            fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
                Ok(())
            }
        }

        assert!(load(&Broken, STORAGE_KEY).is_empty());
        assert!(save(&Broken, STORAGE_KEY, &sample()).is_err());
    }
}

//! Application state
//!
//! `App` owns the form, the list and the store. Mutations go through
//! `submit`, `delete` and `delete_at`; each one that changes the list is
//! followed by an explicit `persist`.

use crate::activity::ActivityRecord;
use crate::config::Config;
use crate::error::StorageError;
use crate::form::{FormState, ValidationErrors};
use crate::list::{ActivityList, EntryId};
use crate::persistence::{self, KeyValueStore};

pub struct App<S: KeyValueStore> {
    pub form: FormState,
    list: ActivityList,
    store: S,
    config: Config,
}

impl<S: KeyValueStore> App<S> {
    /// Load the saved list (or start empty) and a fresh form
    pub fn new(store: S, config: Config) -> Self {
        let list = persistence::load(&store, &config.storage_key);
        Self {
            form: FormState::new(),
            list,
            store,
            config,
        }
    }

    pub fn list(&self) -> &ActivityList {
        &self.list
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate the form and append the record. The list is untouched when
    /// validation fails.
    pub fn submit(&mut self) -> Result<EntryId, ValidationErrors> {
        let record = self.form.submit()?;
        log::info!("Added activity '{}' ({})", record.activity, record.kind);
        let id = self.list.push(record);
        self.persist_or_warn();
        Ok(id)
    }

    pub fn delete(&mut self, id: EntryId) -> Option<ActivityRecord> {
        let removed = self.list.remove(id)?;
        log::info!("Deleted activity '{}'", removed.activity);
        self.persist_or_warn();
        Some(removed)
    }

    pub fn delete_at(&mut self, index: usize) -> Option<ActivityRecord> {
        let removed = self.list.remove_at(index)?;
        log::info!("Deleted activity '{}' at {}", removed.activity, index);
        self.persist_or_warn();
        Some(removed)
    }

    /// Write the full list to the storage slot
    pub fn persist(&self) -> Result<(), StorageError> {
        persistence::save(&self.store, &self.config.storage_key, &self.list)
    }

    /// Re-read the slot after it changed out of band (another tab, manual
    /// clearing). A missing or malformed slot empties the list.
    pub fn reload(&mut self) {
        let fresh = persistence::load(&self.store, &self.config.storage_key);
        self.list.replace(fresh.records().cloned());
    }

    // A failed write leaves the in-memory change in place
    fn persist_or_warn(&self) {
        if let Err(e) = self.persist() {
            log::warn!("Could not save activities: {}", e);
        }
    }
}

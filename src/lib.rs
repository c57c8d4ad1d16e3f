//! Activity List - a suggestion list for things to do instead of procrastinating
//!
//! Core modules:
//! - `activity`: The activity record and its type enumeration
//! - `form`: Field coercion, validation and form state
//! - `list`: Ordered list with stable entry ids
//! - `persistence`: Storage slot load/save
//! - `platform`: Browser LocalStorage backend
//! - `view`: Text shown in the header and on each list card
//! - `app`: Owned application state tying the above together

pub mod activity;
pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod list;
pub mod persistence;
pub mod platform;
pub mod view;

pub use activity::{ActivityRecord, ActivityType};
pub use app::App;
pub use config::Config;
pub use error::StorageError;
pub use form::{Field, FieldError, FormInput, FormState, ValidationErrors};
pub use list::{ActivityList, Entry, EntryId};
pub use persistence::{KeyValueStore, MemoryStore};

/// Form and storage constants
pub mod consts {
    /// LocalStorage key holding the serialized list
    pub const STORAGE_KEY: &str = "activityList";

    /// Minimum activity length (UTF-16 code units)
    pub const ACTIVITY_MIN_LEN: usize = 2;

    /// Accessibility slider bounds
    pub const ACCESSIBILITY_MIN: f64 = 0.0;
    pub const ACCESSIBILITY_MAX: f64 = 1.0;
    pub const DEFAULT_ACCESSIBILITY: f64 = 0.5;
}

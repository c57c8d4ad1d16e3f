//! Activity records
//!
//! Field names on the wire match what the page has always stored under
//! `activityList`, so existing slots keep loading.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_ACCESSIBILITY;

/// Kind of activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    #[default]
    Education,
    Recreational,
    Social,
    Diy,
    Charity,
    Cooking,
    Relaxation,
    Music,
    Busywork,
}

impl ActivityType {
    /// Every type, in select-option order
    pub const ALL: [ActivityType; 9] = [
        ActivityType::Education,
        ActivityType::Recreational,
        ActivityType::Social,
        ActivityType::Diy,
        ActivityType::Charity,
        ActivityType::Cooking,
        ActivityType::Relaxation,
        ActivityType::Music,
        ActivityType::Busywork,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Education => "education",
            ActivityType::Recreational => "recreational",
            ActivityType::Social => "social",
            ActivityType::Diy => "diy",
            ActivityType::Charity => "charity",
            ActivityType::Cooking => "cooking",
            ActivityType::Relaxation => "relaxation",
            ActivityType::Music => "music",
            ActivityType::Busywork => "busywork",
        }
    }

    /// Exact match only; the select never sends anything but the lowercase names
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_accessibility() -> f64 {
    DEFAULT_ACCESSIBILITY
}

/// A single suggestion. Immutable once it is in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// What to do
    pub activity: String,
    /// Cost, never negative
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    #[serde(default)]
    pub booking_required: bool,
    /// 0.0 (hard to access) - 1.0 (anyone can do it)
    #[serde(default = "default_accessibility")]
    pub accessibility: f64,
}

impl ActivityRecord {
    pub fn new(activity: impl Into<String>, price: f64, kind: ActivityType) -> Self {
        Self {
            activity: activity.into(),
            price,
            kind,
            booking_required: false,
            accessibility: DEFAULT_ACCESSIBILITY,
        }
    }

    pub fn with_booking(mut self, booking_required: bool) -> Self {
        self.booking_required = booking_required;
        self
    }

    pub fn with_accessibility(mut self, accessibility: f64) -> Self {
        self.accessibility = accessibility;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_round_trip() {
        for kind in ActivityType::ALL {
            assert_eq!(ActivityType::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(ActivityType::from_str("Education"), None);
        assert_eq!(ActivityType::from_str("gardening"), None);
    }

    #[test]
    fn test_record_wire_field_names() {
        let record = ActivityRecord::new("Read a book", 0.0, ActivityType::Diy).with_booking(true);
        let json = serde_json::to_value(&record).unwrap();
        let obj = json.as_object().unwrap();

        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["accessibility", "activity", "bookingRequired", "price", "type"]
        );
        assert_eq!(obj["type"], "diy");
        assert_eq!(obj["bookingRequired"], true);
    }

    #[test]
    fn test_record_defaults_when_fields_missing() {
        let record: ActivityRecord =
            serde_json::from_str(r#"{"activity":"Bake bread","price":3,"type":"cooking"}"#)
                .unwrap();
        assert!(!record.booking_required);
        assert_eq!(record.accessibility, DEFAULT_ACCESSIBILITY);
        assert_eq!(record.price, 3.0);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let parsed = serde_json::from_str::<ActivityRecord>(
            r#"{"activity":"Nap","price":0,"type":"sleep","bookingRequired":false,"accessibility":1}"#,
        );
        assert!(parsed.is_err());
    }
}

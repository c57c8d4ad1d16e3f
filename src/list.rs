//! The activity list
//!
//! Records keep insertion order. Each one gets an `EntryId` when it enters the
//! list so delete controls stay bound to the right record even if positions
//! shift underneath them. Ids are session-local and never written to storage.

use serde::{Serialize, Serializer};

use crate::activity::ActivityRecord;

/// Stable identifier of a list entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EntryId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(EntryId)
    }
}

/// A record and its id
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub record: ActivityRecord,
}

/// Ordered list of activity records
#[derive(Debug, Clone, Default)]
pub struct ActivityList {
    entries: Vec<Entry>,
    next_id: u64,
}

impl ActivityList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt records (e.g. from storage), assigning fresh ids in order
    pub fn from_records(records: impl IntoIterator<Item = ActivityRecord>) -> Self {
        let mut list = Self::new();
        for record in records {
            list.push(record);
        }
        list
    }

    /// Append a record, returning its id
    pub fn push(&mut self, record: ActivityRecord) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, record });
        id
    }

    /// Remove the entry with `id`. Later entries shift down one position.
    pub fn remove(&mut self, id: EntryId) -> Option<ActivityRecord> {
        let index = self.position(id)?;
        Some(self.entries.remove(index).record)
    }

    /// Remove by position. Out of range is a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<ActivityRecord> {
        if index < self.entries.len() {
            Some(self.entries.remove(index).record)
        } else {
            None
        }
    }

    /// Replace the whole contents. Ids keep counting up so stale delete
    /// controls from before the replacement cannot hit a new entry.
    pub fn replace(&mut self, records: impl IntoIterator<Item = ActivityRecord>) {
        self.entries.clear();
        for record in records {
            self.push(record);
        }
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&ActivityRecord> {
        self.entries.get(index).map(|e| &e.record)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn records(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.entries.iter().map(|e| &e.record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serializes as a plain array of records; ids stay in memory
impl Serialize for ActivityList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityType;
    use proptest::prelude::*;

    fn record(name: &str) -> ActivityRecord {
        ActivityRecord::new(name, 0.0, ActivityType::Social)
    }

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut list = ActivityList::new();
        let a = list.push(record("aa"));
        let b = list.push(record("bb"));
        assert!(a < b);
        assert_eq!(list.len(), 2);
        assert_eq!(list.position(b), Some(1));
    }

    #[test]
    fn test_remove_by_id_with_duplicates() {
        let mut list = ActivityList::new();
        let first = list.push(record("same"));
        let second = list.push(record("same"));

        assert_eq!(list.remove(second), Some(record("same")));
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0].id, first);

        // Already gone
        assert_eq!(list.remove(second), None);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut list = ActivityList::from_records([record("aa")]);
        assert_eq!(list.remove_at(1), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_replace_never_reuses_ids() {
        let mut list = ActivityList::from_records([record("aa"), record("bb")]);
        let old_ids: Vec<_> = list.entries().iter().map(|e| e.id).collect();

        list.replace([record("cc")]);
        assert_eq!(list.len(), 1);
        assert!(!old_ids.contains(&list.entries()[0].id));
    }

    #[test]
    fn test_serializes_as_record_array() {
        let list = ActivityList::from_records([record("aa")]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(
            json,
            r#"[{"activity":"aa","price":0.0,"type":"social","bookingRequired":false,"accessibility":0.5}]"#
        );
    }

    proptest! {
        #[test]
        fn prop_remove_at_drops_exactly_one(len in 1usize..20, pick in any::<prop::sample::Index>()) {
            let records: Vec<_> = (0..len).map(|i| record(&format!("item {i}"))).collect();
            let mut list = ActivityList::from_records(records.clone());
            let index = pick.index(len);

            let removed = list.remove_at(index).unwrap();
            prop_assert_eq!(&removed, &records[index]);
            prop_assert_eq!(list.len(), len - 1);

            let mut expected = records;
            expected.remove(index);
            let remaining: Vec<_> = list.records().cloned().collect();
            prop_assert_eq!(remaining, expected);
        }
    }
}

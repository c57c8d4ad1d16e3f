//! Text for the list header, slider label and list cards
//!
//! Kept free of DOM types so the same strings are checked natively.

use crate::activity::ActivityRecord;
use crate::list::{ActivityList, EntryId};

/// "Total Items: N"
pub fn header_text(list: &ActivityList) -> String {
    format!("Total Items: {}", list.len())
}

/// Slider label, e.g. "Accessibility (0.5 - 1.0) "
pub fn accessibility_label(value: f64) -> String {
    format!("Accessibility ({:.1} - 1.0) ", value)
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// One labelled line on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLine {
    pub label: &'static str,
    pub value: String,
}

/// Everything a list card shows; `id` goes on the delete control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: EntryId,
    pub lines: Vec<CardLine>,
}

impl Card {
    pub fn new(id: EntryId, record: &ActivityRecord) -> Self {
        let line = |label, value: String| CardLine { label, value };
        Self {
            id,
            lines: vec![
                line("Activity", record.activity.clone()),
                line("Price", format!("${}", record.price)),
                line("Type", record.kind.as_str().to_string()),
                line("Booking Required", yes_no(record.booking_required).to_string()),
                line("Accessibility", record.accessibility.to_string()),
            ],
        }
    }
}

/// Cards in list order
pub fn cards(list: &ActivityList) -> Vec<Card> {
    list.entries()
        .iter()
        .map(|e| Card::new(e.id, &e.record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityType;

    #[test]
    fn test_header_counts_items() {
        let mut list = ActivityList::new();
        assert_eq!(header_text(&list), "Total Items: 0");
        list.push(ActivityRecord::new("Call a friend", 0.0, ActivityType::Social));
        assert_eq!(header_text(&list), "Total Items: 1");
    }

    #[test]
    fn test_accessibility_label_one_decimal() {
        assert_eq!(accessibility_label(0.5), "Accessibility (0.5 - 1.0) ");
        assert_eq!(accessibility_label(1.0), "Accessibility (1.0 - 1.0) ");
        assert_eq!(accessibility_label(0.0), "Accessibility (0.0 - 1.0) ");
    }

    #[test]
    fn test_card_lines() {
        let mut list = ActivityList::new();
        let id = list.push(
            ActivityRecord::new("Volunteer", 12.5, ActivityType::Charity)
                .with_booking(true)
                .with_accessibility(1.0),
        );

        let cards = cards(&list);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, id);

        let values: Vec<_> = cards[0]
            .lines
            .iter()
            .map(|l| (l.label, l.value.as_str()))
            .collect();
        assert_eq!(
            values,
            [
                ("Activity", "Volunteer"),
                ("Price", "$12.5"),
                ("Type", "charity"),
                ("Booking Required", "Yes"),
                ("Accessibility", "1"),
            ]
        );
    }

    #[test]
    fn test_whole_prices_have_no_decimals() {
        let card = Card::new(
            EntryId(0),
            &ActivityRecord::new("Walk", 0.0, ActivityType::Relaxation),
        );
        assert_eq!(card.lines[1].value, "$0");
        assert_eq!(card.lines[3].value, "No");
    }
}

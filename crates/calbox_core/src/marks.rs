use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::SelectionPalette;
use crate::item::ScheduleItem;

/// Calendar decoration for one day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkEntry {
    pub has_items: bool,
    pub dot_color: Option<String>,
    pub selected: bool,
    pub selected_color: Option<String>,
    pub selected_text_color: Option<String>,
}

pub type Marks = BTreeMap<NaiveDate, MarkEntry>;

/// Derives the calendar marks for `items`. The first item seen on a day fixes
/// that day's dot color; items without a category color use
/// `default_dot_color`. The selected day always gets an entry.
pub fn compute_marks(
    items: &[ScheduleItem],
    selected: NaiveDate,
    palette: &SelectionPalette,
    default_dot_color: &str,
) -> Marks {
    let mut marks = Marks::new();

    for item in items {
        marks.entry(item.date).or_insert_with(|| MarkEntry {
            has_items: true,
            dot_color: Some(
                item.category_color
                    .clone()
                    .unwrap_or_else(|| default_dot_color.to_string()),
            ),
            ..MarkEntry::default()
        });
    }

    let entry = marks.entry(selected).or_default();
    entry.selected = true;
    entry.selected_color = Some(palette.selected_color.clone());
    entry.selected_text_color = Some(palette.selected_text_color.clone());

    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DOT_COLOR;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    #[test]
    fn first_item_fixes_dot_color() {
        let items = vec![
            ScheduleItem::new("1", "a", day(10)).with_category("Meetings", "#111"),
            ScheduleItem::new("2", "b", day(10)).with_category("Health", "#222"),
            ScheduleItem::new("3", "c", day(11)),
        ];
        let marks = compute_marks(&items, day(20), &SelectionPalette::default(), DEFAULT_DOT_COLOR);

        assert_eq!(marks.len(), 3);
        assert_eq!(marks[&day(10)].dot_color.as_deref(), Some("#111"));
        assert_eq!(marks[&day(11)].dot_color.as_deref(), Some(DEFAULT_DOT_COLOR));
        assert!(!marks[&day(10)].selected);
    }

    #[test]
    fn selection_merges_into_existing_entry() {
        let items = vec![ScheduleItem::new("1", "a", day(10)).with_category("Meetings", "#111")];
        let marks = compute_marks(&items, day(10), &SelectionPalette::default(), DEFAULT_DOT_COLOR);

        let entry = &marks[&day(10)];
        assert!(entry.has_items);
        assert!(entry.selected);
        assert_eq!(entry.dot_color.as_deref(), Some("#111"));
        assert_eq!(entry.selected_color.as_deref(), Some("#1A1A1A"));
    }

    #[test]
    fn empty_selected_day_is_synthesized() {
        let marks = compute_marks(&[], day(5), &SelectionPalette::default(), DEFAULT_DOT_COLOR);
        let entry = &marks[&day(5)];
        assert!(entry.selected);
        assert!(!entry.has_items);
        assert_eq!(entry.dot_color, None);
    }
}

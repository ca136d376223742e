use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::dates::{self, format_clock_time};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Sort rank for untimed items: high first.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "dates::canonical_date")]
    pub date: NaiveDate,
    #[serde(
        default,
        with = "dates::optional_clock_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<NaiveTime>,
    #[serde(
        default,
        with = "dates::optional_clock_time",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub completed: bool,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_color: Option<String>,
}

impl ScheduleItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            date,
            time: None,
            end_time: None,
            completed: false,
            priority: Priority::Medium,
            category: None,
            category_color: None,
        }
    }

    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_end_time(mut self, end_time: NaiveTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>, color: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self.category_color = Some(color.into());
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// `"16:00 - 16:15"`, `"16:00"` when there is no end, `None` for untimed items.
    pub fn time_range(&self) -> Option<String> {
        let start = format_clock_time(self.time?);
        match self.end_time {
            Some(end) => Some(format!("{} - {}", start, format_clock_time(end))),
            None => Some(start),
        }
    }

    /// Agenda ordering within a single day. Timed items precede untimed ones,
    /// timed items run earliest first, untimed items run by priority.
    pub fn agenda_order(&self, other: &Self) -> Ordering {
        match (self.time, other.time) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.priority.rank().cmp(&other.priority.rank()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn item() -> ScheduleItem {
        ScheduleItem::new("1", "Standup", NaiveDate::from_ymd_opt(2026, 1, 10).unwrap())
    }

    #[test]
    fn time_range_formats_optional_end() {
        assert_eq!(item().time_range(), None);
        assert_eq!(item().with_time(at(16, 0)).time_range().as_deref(), Some("16:00"));
        assert_eq!(
            item()
                .with_time(at(16, 0))
                .with_end_time(at(16, 15))
                .time_range()
                .as_deref(),
            Some("16:00 - 16:15")
        );
    }

    #[test]
    fn decodes_camel_case_json() {
        let json = r##"{
            "id": "12",
            "title": "Dentist Appointment",
            "date": "2026-01-14",
            "time": "14:30",
            "endTime": "15:00",
            "completed": false,
            "priority": "medium",
            "category": "Health",
            "categoryColor": "#EF4444"
        }"##;
        let item: ScheduleItem = serde_json::from_str(json).expect("decode item");
        assert_eq!(item.time, Some(at(14, 30)));
        assert_eq!(item.end_time, Some(at(15, 0)));
        assert_eq!(item.priority, Priority::Medium);
        assert_eq!(item.category_color.as_deref(), Some("#EF4444"));
    }

    #[test]
    fn rejects_unpadded_time() {
        let json = r#"{"id":"1","title":"x","date":"2026-01-14","time":"9:00","priority":"low"}"#;
        assert!(serde_json::from_str::<ScheduleItem>(json).is_err());
    }

    #[test]
    fn untimed_items_order_by_priority() {
        let high = item().with_priority(Priority::High);
        let low = item().with_priority(Priority::Low);
        assert_eq!(high.agenda_order(&low), Ordering::Less);
        assert_eq!(low.agenda_order(&item().with_time(at(23, 59))), Ordering::Greater);
    }
}

//! Conversions between calendar dates and their canonical `YYYY-MM-DD` keys,
//! plus the human-facing labels derived from them.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, Result};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";
const CLOCK_TIME_FORMAT: &str = "%H:%M";

/// Projects an instant onto its calendar day in the instant's own time zone.
pub fn date_key<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    format_date_key(instant.date_naive())
}

pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parses a canonical date key. Non-padded or otherwise non-canonical input
/// such as `2026-1-5` is rejected even though it names a real day.
pub fn parse_date_key(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_KEY_FORMAT)
        .ok()
        .filter(|date| format_date_key(*date) == input)
        .ok_or_else(|| AgendaError::InvalidDate {
            input: input.to_string(),
        })
}

pub fn format_clock_time(time: NaiveTime) -> String {
    time.format(CLOCK_TIME_FORMAT).to_string()
}

pub fn parse_clock_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input, CLOCK_TIME_FORMAT)
        .ok()
        .filter(|time| format_clock_time(*time) == input)
        .ok_or_else(|| AgendaError::InvalidTime {
            input: input.to_string(),
        })
}

/// Names used when rendering dates. Weekday tables start on Sunday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub month_names: [&'static str; 12],
    pub day_names: [&'static str; 7],
    pub day_names_short: [&'static str; 7],
    pub today: &'static str,
    pub tomorrow: &'static str,
    pub yesterday: &'static str,
}

impl Locale {
    pub fn english() -> Self {
        Self {
            month_names: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            day_names: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ],
            day_names_short: ["S", "M", "T", "W", "T", "F", "S"],
            today: "Today",
            tomorrow: "Tomorrow",
            yesterday: "Yesterday",
        }
    }

    /// `"Today"`, `"Tomorrow"`, `"Yesterday"`, or `"<Weekday>, <day> <month>"`.
    pub fn relative_label(&self, date: NaiveDate, reference: NaiveDate) -> String {
        match self.relative_word(date, reference) {
            Some(word) => word.to_string(),
            None => self.long_date(date),
        }
    }

    /// Header variant that keeps the day and month next to the relative word,
    /// e.g. `"Today, 19 October"`.
    pub fn header_title(&self, date: NaiveDate, reference: NaiveDate) -> String {
        match self.relative_word(date, reference) {
            Some(word) => format!("{}, {} {}", word, date.day(), self.month_name(date)),
            None => self.long_date(date),
        }
    }

    pub fn day_header(&self, date: NaiveDate) -> DayHeader {
        DayHeader {
            weekday_letter: self.day_names_short[weekday_index(date)].to_string(),
            day_number: format!("{:02}", date.day()),
        }
    }

    fn relative_word(&self, date: NaiveDate, reference: NaiveDate) -> Option<&'static str> {
        match date.signed_duration_since(reference).num_days() {
            0 => Some(self.today),
            1 => Some(self.tomorrow),
            -1 => Some(self.yesterday),
            _ => None,
        }
    }

    fn long_date(&self, date: NaiveDate) -> String {
        format!(
            "{}, {} {}",
            self.day_names[weekday_index(date)],
            date.day(),
            self.month_name(date)
        )
    }

    fn month_name(&self, date: NaiveDate) -> &'static str {
        self.month_names[date.month0() as usize]
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

/// Compact label shown at the left of each agenda page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHeader {
    pub weekday_letter: String,
    pub day_number: String,
}

pub fn relative_label(date: NaiveDate, reference: NaiveDate) -> String {
    Locale::english().relative_label(date, reference)
}

pub fn relative_label_for_keys(key: &str, reference_key: &str) -> Result<String> {
    let date = parse_date_key(key)?;
    let reference = parse_date_key(reference_key)?;
    Ok(relative_label(date, reference))
}

fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// Serde codec for date keys that applies the same strict parsing as
/// `parse_date_key`.
pub(crate) mod canonical_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_date_key(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_date_key(&raw).map_err(serde::de::Error::custom)
    }
}

pub(crate) mod optional_clock_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_some(&super::format_clock_time(*time)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_clock_time(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_instants_share_a_key() {
        let morning = Utc.with_ymd_and_hms(2026, 3, 14, 0, 5, 0).unwrap();
        let night = Utc.with_ymd_and_hms(2026, 3, 14, 23, 59, 59).unwrap();
        assert_eq!(date_key(&morning), "2026-03-14");
        assert_eq!(date_key(&morning), date_key(&night));
    }

    #[test]
    fn key_follows_the_instant_offset() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let instant = tokyo.with_ymd_and_hms(2026, 1, 1, 1, 0, 0).unwrap();
        assert_eq!(date_key(&instant), "2026-01-01");
        assert_eq!(date_key(&instant.with_timezone(&Utc)), "2025-12-31");
    }

    #[test]
    fn rejects_malformed_keys() {
        for input in ["", "2026-13-01", "2026-02-30", "2026-1-5", "20260105", "2026-01-05T00:00"] {
            assert!(
                matches!(parse_date_key(input), Err(AgendaError::InvalidDate { .. })),
                "{input} should be rejected"
            );
        }
        assert_eq!(parse_date_key("2024-02-29").unwrap(), day(2024, 2, 29));
    }

    #[test]
    fn clock_times_must_be_padded() {
        assert!(parse_clock_time("9:00").is_err());
        assert!(parse_clock_time("24:00").is_err());
        assert_eq!(
            parse_clock_time("09:05").unwrap(),
            NaiveTime::from_hms_opt(9, 5, 0).unwrap()
        );
    }

    #[test]
    fn relative_labels_compare_days() {
        let reference = day(2026, 10, 19);
        assert_eq!(relative_label(reference, reference), "Today");
        assert_eq!(relative_label(day(2026, 10, 20), reference), "Tomorrow");
        assert_eq!(relative_label(day(2026, 10, 18), reference), "Yesterday");
        assert_eq!(relative_label(day(2026, 10, 26), reference), "Monday, 26 October");
    }

    #[test]
    fn relative_labels_cross_year_boundaries() {
        assert_eq!(
            relative_label_for_keys("2027-01-01", "2026-12-31").unwrap(),
            "Tomorrow"
        );
        assert!(relative_label_for_keys("2027-01-01", "yesterday").is_err());
    }

    #[test]
    fn header_title_keeps_day_and_month() {
        let locale = Locale::english();
        let reference = day(2026, 10, 19);
        assert_eq!(locale.header_title(reference, reference), "Today, 19 October");
        assert_eq!(
            locale.header_title(day(2026, 10, 18), reference),
            "Yesterday, 18 October"
        );
        assert_eq!(
            locale.header_title(day(2026, 11, 1), reference),
            "Sunday, 1 November"
        );
    }

    #[test]
    fn day_header_pads_day_number() {
        let header = Locale::english().day_header(day(2026, 10, 5));
        assert_eq!(header.weekday_letter, "M");
        assert_eq!(header.day_number, "05");
    }
}

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDescriptor {
    pub date: NaiveDate,
    /// Midnight at the start of `date`.
    pub instant: NaiveDateTime,
    pub is_today: bool,
}

impl DayDescriptor {
    fn new(date: NaiveDate, reference: NaiveDate) -> Self {
        Self {
            date,
            instant: date.and_time(NaiveTime::MIN),
            is_today: date == reference,
        }
    }
}

/// Immutable run of consecutive days centered on a reference date. A new
/// reference means a new `Timeline`; there is no way to shift one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    reference: NaiveDate,
    days: Vec<DayDescriptor>,
}

impl Timeline {
    /// Builds `window_size / 2` days on each side of `reference` plus the
    /// reference itself. Days that would fall outside chrono's representable
    /// range are dropped.
    pub fn build(window_size: usize, reference: NaiveDate) -> Self {
        let half = (window_size / 2) as i64;
        let days = (-half..=half)
            .filter_map(|offset| reference.checked_add_signed(Duration::days(offset)))
            .map(|date| DayDescriptor::new(date, reference))
            .collect();
        Self { reference, days }
    }

    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    pub fn days(&self) -> &[DayDescriptor] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DayDescriptor> {
        self.days.get(index)
    }

    pub fn first(&self) -> Option<NaiveDate> {
        self.days.first().map(|day| day.date)
    }

    pub fn last(&self) -> Option<NaiveDate> {
        self.days.last().map(|day| day.date)
    }

    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let first = self.first()?;
        let offset = usize::try_from(date.signed_duration_since(first).num_days()).ok()?;
        (offset < self.days.len()).then_some(offset)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.index_of(date).is_some()
    }

    /// Page holding the reference day, or the middle page if it is missing.
    pub fn today_index(&self) -> usize {
        self.index_of(self.reference).unwrap_or(self.days.len() / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn builds_contiguous_window_around_reference() {
        let timeline = Timeline::build(60, day(2026, 6, 1));
        assert_eq!(timeline.len(), 61);
        assert_eq!(timeline.first(), Some(day(2026, 5, 2)));
        assert_eq!(timeline.last(), Some(day(2026, 7, 1)));
        assert_eq!(timeline.today_index(), 30);
        assert!(timeline.get(30).unwrap().is_today);
        assert_eq!(timeline.days().iter().filter(|d| d.is_today).count(), 1);
        for pair in timeline.days().windows(2) {
            assert_eq!(pair[1].date.signed_duration_since(pair[0].date).num_days(), 1);
        }
    }

    #[test]
    fn crosses_leap_day_and_year_end() {
        let leap = Timeline::build(4, day(2028, 2, 29));
        let dates: Vec<NaiveDate> = leap.days().iter().map(|d| d.date).collect();
        assert_eq!(
            dates,
            vec![
                day(2028, 2, 27),
                day(2028, 2, 28),
                day(2028, 2, 29),
                day(2028, 3, 1),
                day(2028, 3, 2)
            ]
        );

        let year_end = Timeline::build(2, day(2026, 12, 31));
        assert_eq!(year_end.last(), Some(day(2027, 1, 1)));
    }

    #[test]
    fn index_lookup_is_bounded() {
        let timeline = Timeline::build(10, day(2026, 6, 1));
        assert_eq!(timeline.index_of(day(2026, 5, 27)), Some(0));
        assert_eq!(timeline.index_of(day(2026, 6, 6)), Some(10));
        assert_eq!(timeline.index_of(day(2026, 5, 26)), None);
        assert_eq!(timeline.index_of(day(2026, 6, 7)), None);
    }

    #[test]
    fn instant_is_midnight() {
        let timeline = Timeline::build(0, day(2026, 6, 1));
        assert_eq!(timeline.len(), 1);
        assert_eq!(
            timeline.get(0).unwrap().instant,
            day(2026, 6, 1).and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn odd_window_rounds_down_per_side() {
        assert_eq!(Timeline::build(61, day(2026, 6, 1)).len(), 61);
    }
}

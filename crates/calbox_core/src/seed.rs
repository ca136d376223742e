//! Demo schedule laid out around a given day, used by the terminal app when
//! no seed file is supplied.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::item::{Priority, ScheduleItem};

const MEETINGS: &str = "#6366F1";
const LEARNING: &str = "#10B981";
const RESEARCH: &str = "#F59E0B";
const BOOKS: &str = "#EC4899";
const DEVELOPMENT: &str = "#8B5CF6";
const PERSONAL: &str = "#06B6D4";
const HEALTH: &str = "#EF4444";
const SOCIAL: &str = "#F97316";
const ADMIN: &str = "#64748B";

pub fn sample_items(today: NaiveDate) -> Vec<ScheduleItem> {
    let on = |offset: i64| {
        today
            .checked_add_signed(Duration::days(offset))
            .unwrap_or(today)
    };
    let at = |h: u32, m: u32| NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN);
    let meeting = |id: &str, title: &str, start: (u32, u32), end: (u32, u32), priority| {
        ScheduleItem::new(id, title, on(0))
            .with_time(at(start.0, start.1))
            .with_end_time(at(end.0, end.1))
            .with_priority(priority)
            .with_category("Meetings", MEETINGS)
    };

    vec![
        meeting("1", "Weekly Product Sync <> Si Min", (16, 0), (16, 15), Priority::High)
            .with_description("Discuss product roadmap and upcoming features"),
        meeting("2", "Weekly Product Sync <> Wallace", (16, 15), (16, 30), Priority::High)
            .with_description("Review sprint progress"),
        meeting("3", "Weekly Product Sync <> Eko", (16, 30), (16, 45), Priority::Medium)
            .with_description("Design review session"),
        meeting("4", "Weekly Product Sync <> Jian Jie", (16, 45), (17, 0), Priority::Medium)
            .with_description("Engineering sync"),
        ScheduleItem::new("5", "Watch Ryan Hoover Seminar", on(1))
            .with_description("ProductHunt founder sharing insights on launching products")
            .with_category("Learning", LEARNING),
        ScheduleItem::new("6", "[Research] Detailed competitor analysis", on(1))
            .with_description("Analyze top 5 competitors in the market")
            .with_priority(Priority::High)
            .with_category("Research", RESEARCH),
        ScheduleItem::new("7", "The Vanishing Half, by Brit Bennett", on(2))
            .with_description("Book club discussion")
            .with_priority(Priority::Low)
            .with_category("bookworms", BOOKS),
        ScheduleItem::new("8", "Utopia Avenue, by David Mitchell", on(2))
            .with_description("Finish reading chapters 5-8")
            .with_priority(Priority::Low)
            .with_category("bookworms", BOOKS),
        ScheduleItem::new("9", "Look at migrating from Sendgrid", on(2))
            .with_description("Research cheaper email alternatives")
            .with_category("Development", DEVELOPMENT),
        ScheduleItem::new("10", "Q4 Planning Session", on(3))
            .with_description("Annual planning with leadership team")
            .with_time(at(9, 0))
            .with_end_time(at(12, 0))
            .with_priority(Priority::High)
            .with_category("Meetings", MEETINGS),
        ScheduleItem::new("11", "Update portfolio website", on(3))
            .with_description("Add new projects and refresh design")
            .with_priority(Priority::Low)
            .with_category("Personal", PERSONAL),
        ScheduleItem::new("12", "Dentist Appointment", on(4))
            .with_description("Regular checkup")
            .with_time(at(14, 30))
            .with_end_time(at(15, 0))
            .with_category("Health", HEALTH),
        ScheduleItem::new("13", "Prepare presentation slides", on(4))
            .with_description("For the investor meeting next week")
            .with_priority(Priority::High)
            .with_category("Work", MEETINGS),
        ScheduleItem::new("14", "Team lunch", on(5))
            .with_description("Monthly team bonding")
            .with_time(at(12, 0))
            .with_end_time(at(14, 0))
            .with_priority(Priority::Low)
            .with_category("Social", SOCIAL),
        ScheduleItem::new("15", "Code review session", on(6))
            .with_description("Review PRs from the team")
            .with_time(at(10, 0))
            .with_end_time(at(11, 30))
            .with_category("Development", DEVELOPMENT),
        ScheduleItem::new("16", "Gym - Leg Day", on(6))
            .with_description("Don't skip leg day!")
            .with_time(at(18, 0))
            .with_end_time(at(19, 30))
            .with_category("Health", HEALTH),
        ScheduleItem::new("17", "Submit expense reports", on(-1))
            .with_completed(true)
            .with_category("Admin", ADMIN),
        ScheduleItem::new("18", "Review contract draft", on(-1))
            .with_completed(true)
            .with_priority(Priority::High)
            .with_category("Legal", MEETINGS),
        ScheduleItem::new("19", "Finalize budget proposal", on(-2))
            .with_completed(true)
            .with_priority(Priority::High)
            .with_category("Finance", LEARNING),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_ids_are_unique_and_dated_around_today() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let items = sample_items(today);
        let ids: HashSet<&str> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
        assert!(items
            .iter()
            .all(|item| item.date.signed_duration_since(today).num_days().abs() <= 6));
        assert_eq!(items.iter().filter(|item| item.date == today).count(), 4);
    }
}

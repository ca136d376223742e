use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::item::ScheduleItem;

/// What caused the selected date to change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SelectionOrigin {
    /// A calendar day was picked and the agenda is being scrolled to it.
    Programmatic,
    /// The user paged the agenda and it settled on a new day.
    Scroll,
    /// The "Today" button.
    Today,
}

/// Rendering layers and analytics adapters implement this to hear about
/// agenda changes. Hooks fire after the state has been updated.
pub trait AgendaObserver: Send + Sync {
    fn selection_changed(&self, _date: NaiveDate, _origin: SelectionOrigin) {}
    fn item_toggled(&self, _item: &ScheduleItem) {}
}

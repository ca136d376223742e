use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    clock::{Clock, SystemClock},
    config::AgendaConfig,
    dates::{parse_date_key, DayHeader, Locale},
    error::Result,
    item::ScheduleItem,
    marks::{compute_marks, Marks},
    observer::{AgendaObserver, SelectionOrigin},
    store::ItemStore,
    timeline::{DayDescriptor, Timeline},
};

/// Instruction for the rendering layer to move the paged agenda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub index: usize,
    pub date: NaiveDate,
    pub animated: bool,
}

/// Everything needed to draw one agenda page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPage {
    pub day: DayDescriptor,
    pub header: DayHeader,
    pub items: Vec<ScheduleItem>,
}

/// Owns the selected date, the timeline window and the schedule items, and
/// keeps the paged agenda and the calendar selection in step.
///
/// While a programmatic scroll is in flight (`scroll_target` is set) only a
/// settle on the exact target page may change the selection.
pub struct AgendaController {
    config: AgendaConfig,
    clock: Box<dyn Clock>,
    locale: Locale,
    today: NaiveDate,
    timeline: Timeline,
    store: ItemStore,
    selected: NaiveDate,
    scroll_target: Option<NaiveDate>,
    observers: Vec<Box<dyn AgendaObserver>>,
}

pub struct AgendaControllerBuilder {
    config: AgendaConfig,
    clock: Option<Box<dyn Clock>>,
    locale: Locale,
    store: ItemStore,
    observers: Vec<Box<dyn AgendaObserver>>,
}

impl AgendaControllerBuilder {
    pub fn new() -> Self {
        Self {
            config: AgendaConfig::default(),
            clock: None,
            locale: Locale::default(),
            store: ItemStore::default(),
            observers: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: AgendaConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_items(mut self, items: impl Into<ItemStore>) -> Self {
        self.store = items.into();
        self
    }

    pub fn add_observer(mut self, observer: Box<dyn AgendaObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn build(self) -> AgendaController {
        let clock = self.clock.unwrap_or_else(|| Box::new(SystemClock));
        let today = clock.today();
        let timeline = Timeline::build(self.config.window_size, today);
        info!(
            %today,
            days = timeline.len(),
            items = self.store.len(),
            "agenda controller ready"
        );
        AgendaController {
            config: self.config,
            clock,
            locale: self.locale,
            today,
            timeline,
            store: self.store,
            selected: today,
            scroll_target: None,
            observers: self.observers,
        }
    }
}

impl Default for AgendaControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AgendaController {
    pub fn builder() -> AgendaControllerBuilder {
        AgendaControllerBuilder::new()
    }

    pub fn config(&self) -> &AgendaConfig {
        &self.config
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected
    }

    pub fn scroll_target(&self) -> Option<NaiveDate> {
        self.scroll_target
    }

    /// Page index of the selected date, `None` when it lies outside the window.
    pub fn selected_index(&self) -> Option<usize> {
        self.timeline.index_of(self.selected)
    }

    pub fn is_selected_today(&self) -> bool {
        self.selected == self.today
    }

    pub fn header_title(&self) -> String {
        self.locale.header_title(self.selected, self.today)
    }

    pub fn marks(&self) -> Marks {
        compute_marks(
            self.store.items(),
            self.selected,
            &self.config.palette(),
            &self.config.default_dot_color,
        )
    }

    pub fn items_for_date(&self, date: NaiveDate) -> Vec<ScheduleItem> {
        self.store.items_for_date(date)
    }

    pub fn items_for_selected_date(&self) -> Vec<ScheduleItem> {
        self.store.items_for_date(self.selected)
    }

    pub fn day_page(&self, index: usize) -> Option<DayPage> {
        let day = self.timeline.get(index)?.clone();
        Some(DayPage {
            header: self.locale.day_header(day.date),
            items: self.store.items_for_date(day.date),
            day,
        })
    }

    /// Where the agenda should sit when first shown: today's page, without
    /// animation.
    pub fn initial_scroll(&self) -> Option<ScrollRequest> {
        let index = self.timeline.today_index();
        let day = self.timeline.get(index)?;
        Some(ScrollRequest {
            index,
            date: day.date,
            animated: false,
        })
    }

    /// Selects `date`. Returns the animated scroll the view should perform,
    /// or `None` when `date` is outside the timeline; the selection still
    /// moves in that case, leaving the header ahead of the paged body.
    pub fn select_date(&mut self, date: NaiveDate) -> Option<ScrollRequest> {
        self.select_with_origin(date, SelectionOrigin::Programmatic)
    }

    pub fn select_date_key(&mut self, key: &str) -> Result<Option<ScrollRequest>> {
        let date = parse_date_key(key)?;
        Ok(self.select_date(date))
    }

    pub fn select_today(&mut self) -> Option<ScrollRequest> {
        self.select_with_origin(self.today, SelectionOrigin::Today)
    }

    /// Called when the paged view stops moving on page `index`. Returns
    /// whether the selected date changed.
    pub fn on_scroll_settle(&mut self, index: usize) -> bool {
        let Some(observed) = self.timeline.get(index).map(|day| day.date) else {
            debug!(index, "scroll settled outside the timeline");
            return false;
        };

        if let Some(target) = self.scroll_target {
            if observed != target {
                debug!(index, %observed, %target, "scroll settled short of target");
                return false;
            }
            self.scroll_target = None;
            debug!(%target, "programmatic scroll reached target");
            return self.commit_selection(observed, SelectionOrigin::Programmatic);
        }

        self.commit_selection(observed, SelectionOrigin::Scroll)
    }

    /// Maps a horizontal content offset to the nearest page, clamped into the
    /// timeline.
    pub fn page_index_for_offset(&self, offset: f64, page_width: f64) -> Option<usize> {
        if self.timeline.is_empty() || !offset.is_finite() || !page_width.is_finite() {
            return None;
        }
        if page_width <= 0.0 {
            return None;
        }
        let page = (offset / page_width).round().max(0.0) as usize;
        Some(page.min(self.timeline.len() - 1))
    }

    pub fn on_scroll_settle_offset(&mut self, offset: f64, page_width: f64) -> bool {
        match self.page_index_for_offset(offset, page_width) {
            Some(index) => self.on_scroll_settle(index),
            None => false,
        }
    }

    /// Flips completion of item `id`. Unknown ids are logged and ignored.
    pub fn toggle_completed(&mut self, id: &str) -> bool {
        let item = match self.store.toggle_completed(id) {
            Ok(item) => item.clone(),
            Err(err) => {
                warn!(%err, "toggle ignored");
                return false;
            }
        };
        debug!(id, completed = item.completed, "item toggled");
        for observer in &self.observers {
            observer.item_toggled(&item);
        }
        true
    }

    /// Rebuilds the timeline if the clock has moved to another day. Page
    /// indices from the old timeline are stale afterwards, so a rebuild returns
    /// a non-animated jump to the selected date's new page, or to today's page
    /// when the selection fell out of the window.
    pub fn refresh_today(&mut self) -> Option<ScrollRequest> {
        let today = self.clock.today();
        if today == self.today {
            return None;
        }
        let previous = self.today;
        self.today = today;
        self.timeline = Timeline::build(self.config.window_size, today);
        if let Some(target) = self.scroll_target {
            if !self.timeline.contains(target) {
                debug!(%target, "dropping scroll target outside rebuilt timeline");
                self.scroll_target = None;
            }
        }
        info!(%previous, %today, "timeline rebuilt for new day");

        let index = self
            .timeline
            .index_of(self.selected)
            .unwrap_or_else(|| self.timeline.today_index());
        let day = self.timeline.get(index)?;
        Some(ScrollRequest {
            index,
            date: day.date,
            animated: false,
        })
    }

    fn select_with_origin(
        &mut self,
        date: NaiveDate,
        origin: SelectionOrigin,
    ) -> Option<ScrollRequest> {
        self.selected = date;
        self.notify_selection(date, origin);

        let Some(index) = self.timeline.index_of(date) else {
            debug!(%date, "selected date outside timeline; no scroll");
            self.scroll_target = None;
            return None;
        };
        self.scroll_target = Some(date);
        debug!(%date, index, "scrolling to selected date");
        Some(ScrollRequest {
            index,
            date,
            animated: true,
        })
    }

    fn commit_selection(&mut self, date: NaiveDate, origin: SelectionOrigin) -> bool {
        if self.selected == date {
            return false;
        }
        self.selected = date;
        debug!(%date, ?origin, "selection committed");
        self.notify_selection(date, origin);
        true
    }

    fn notify_selection(&self, date: NaiveDate, origin: SelectionOrigin) {
        for observer in &self.observers {
            observer.selection_changed(date, origin);
        }
    }
}

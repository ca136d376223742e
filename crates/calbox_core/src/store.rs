use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use tracing::info;

use crate::error::{AgendaError, Result};
use crate::item::ScheduleItem;

/// In-memory schedule items in insertion order. Items are never removed; the
/// only mutation is flipping completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<ScheduleItem>,
}

impl ItemStore {
    pub fn new(items: Vec<ScheduleItem>) -> Self {
        Self { items }
    }

    /// Decodes a JSON array of items.
    pub fn from_json(raw: &str) -> Result<Self> {
        let items: Vec<ScheduleItem> = serde_json::from_str(raw)?;
        Ok(Self::new(items))
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("unable to read seed file {}", path.display()))?;
        let store = Self::from_json(&raw)
            .with_context(|| format!("unable to parse seed file {}", path.display()))?;
        info!(path = %path.display(), item_count = store.len(), "seed items loaded");
        Ok(store)
    }

    pub fn items(&self) -> &[ScheduleItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ScheduleItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items on `date` in agenda order. `sort_by` is stable, so items that
    /// compare equal keep their insertion order.
    pub fn items_for_date(&self, date: NaiveDate) -> Vec<ScheduleItem> {
        let mut matching: Vec<ScheduleItem> = self
            .items
            .iter()
            .filter(|item| item.date == date)
            .cloned()
            .collect();
        matching.sort_by(ScheduleItem::agenda_order);
        matching
    }

    pub fn toggle_completed(&mut self, id: &str) -> Result<&ScheduleItem> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| AgendaError::NotFound { id: id.to_string() })?;
        item.completed = !item.completed;
        Ok(item)
    }
}

impl From<Vec<ScheduleItem>> for ItemStore {
    fn from(items: Vec<ScheduleItem>) -> Self {
        Self::new(items)
    }
}

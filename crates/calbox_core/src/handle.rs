use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::controller::AgendaController;

/// Cloneable handle to a controller shared between the event thread and
/// rendering/animation threads. Readers may take snapshots at any time;
/// mutations are expected to come from the event thread only.
#[derive(Clone)]
pub struct AgendaHandle {
    inner: Arc<RwLock<AgendaController>>,
}

impl AgendaHandle {
    pub fn new(controller: AgendaController) -> Self {
        Self {
            inner: Arc::new(RwLock::new(controller)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, AgendaController> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, AgendaController> {
        self.inner.write()
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.inner.read().selected_date()
    }

    pub fn scroll_target(&self) -> Option<NaiveDate> {
        self.inner.read().scroll_target()
    }
}

impl From<AgendaController> for AgendaHandle {
    fn from(controller: AgendaController) -> Self {
        Self::new(controller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use std::thread;

    #[test]
    fn readers_see_event_thread_writes() {
        let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let handle = AgendaHandle::new(
            AgendaController::builder()
                .with_clock(FixedClock(today))
                .build(),
        );

        let target = today.succ_opt().unwrap();
        let request = handle.write().select_date(target).expect("in window");

        let reader = handle.clone();
        let observed = thread::spawn(move || (reader.selected_date(), reader.scroll_target()))
            .join()
            .expect("reader thread");
        assert_eq!(observed, (target, Some(target)));

        handle.write().on_scroll_settle(request.index);
        assert_eq!(handle.scroll_target(), None);
    }
}

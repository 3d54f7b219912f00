//! Imperative shell around the alert board.
//!
//! The presenter owns the board, renders every change through the form
//! surface, and keeps one cancellable expiry task per non-persistent alert.
//! Replacing or clearing an alert cancels its pending expiry, so a new
//! validation pass can never race a stale timer.

use crate::alerts::board::{Alert, AlertBoard, AlertSlot};
use crate::form::FieldId;
use crate::schedule::{self, TaskHandle};
use crate::surface::FormSurface;
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

struct PresenterInner {
    board: Mutex<AlertBoard>,
    timers: Mutex<HashMap<AlertSlot, TaskHandle>>,
    surface: Arc<dyn FormSurface>,
    ttl: Duration,
}

/// Shows and clears user-facing alerts, enforcing at most one visible
/// alert per slot.
///
/// Cheap to clone; clones share the same board and timers. Showing a
/// non-persistent alert schedules its expiry, which requires a running
/// Tokio runtime.
#[derive(Clone)]
pub struct AlertPresenter {
    inner: Arc<PresenterInner>,
}

impl AlertPresenter {
    /// Create a presenter rendering through `surface`, expiring
    /// non-persistent alerts after `ttl`.
    pub fn new(surface: Arc<dyn FormSurface>, ttl: Duration) -> Self {
        Self {
            inner: Arc::new(PresenterInner {
                board: Mutex::new(AlertBoard::new()),
                timers: Mutex::new(HashMap::new()),
                surface,
                ttl,
            }),
        }
    }

    /// Show an alert on a slot, displacing any alert already there.
    ///
    /// Field alerts mark the field's container and move focus to it;
    /// multi-line messages (password rule violations) render one item per
    /// line. Non-persistent alerts auto-clear after the TTL.
    pub fn show(&self, slot: AlertSlot, message: &str) {
        self.clear(slot);

        let alert = Alert::new(slot, message, Utc::now());
        debug!(slot = ?slot, lines = alert.lines.len(), "showing alert");

        self.inner.surface.render_alert(&alert);
        if let AlertSlot::Field(field) = slot {
            self.inner.surface.mark_error(field);
            self.inner.surface.focus(field);
        }

        let persistent = alert.persistent;
        self.inner.board.lock().show(alert);

        if !persistent {
            let presenter = self.clone();
            let handle = schedule::once(self.inner.ttl, move || presenter.clear(slot));
            self.inner.timers.lock().insert(slot, handle);
        }
    }

    /// Clear a slot's alert and error mark. Idempotent: clearing an empty
    /// slot does nothing.
    pub fn clear(&self, slot: AlertSlot) {
        if let Some(timer) = self.inner.timers.lock().remove(&slot) {
            timer.cancel();
        }
        if self.inner.board.lock().clear(slot).is_some() {
            debug!(slot = ?slot, "alert cleared");
            self.inner.surface.remove_alert(slot);
            if let AlertSlot::Field(field) = slot {
                self.inner.surface.unmark_error(field);
            }
        }
    }

    /// Clear every alert and error mark; runs at the start of each
    /// validation pass.
    pub fn clear_all(&self) {
        for (_, timer) in self.inner.timers.lock().drain() {
            timer.cancel();
        }
        let removed = self.inner.board.lock().clear_all();
        for alert in removed {
            self.inner.surface.remove_alert(alert.slot);
            if let AlertSlot::Field(field) = alert.slot {
                self.inner.surface.unmark_error(field);
            }
        }
    }

    /// Direct interaction implies acknowledged: focusing a field clears
    /// that field's own alert, leaving the others untouched.
    pub fn acknowledge_focus(&self, field: FieldId) {
        self.clear(AlertSlot::Field(field));
    }

    /// Snapshot of the alert on a slot, if visible.
    pub fn visible(&self, slot: AlertSlot) -> Option<Alert> {
        self.inner.board.lock().get(slot).cloned()
    }

    pub fn visible_count(&self) -> usize {
        self.inner.board.lock().len()
    }

    pub fn is_marked(&self, field: FieldId) -> bool {
        self.inner.board.lock().error_marked(field)
    }
}

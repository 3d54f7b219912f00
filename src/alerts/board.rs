//! Pure alert state: the board and its invariants.

use crate::form::FieldId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Where an alert attaches.
///
/// Field alerts render inside the field's container and mark it with an
/// error flag; `General` and `Success` alerts are globally positioned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertSlot {
    Field(FieldId),
    General,
    Success,
}

/// Alert category, driving presentation style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    Error,
    Success,
    General,
}

/// A single visible alert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub slot: AlertSlot,
    pub kind: AlertKind,
    /// Message lines. Password alerts carry one line per unmet rule; every
    /// other alert has exactly one line.
    pub lines: Vec<String>,
    pub shown_at: DateTime<Utc>,
    /// Persistent alerts never auto-expire; they are cleared by the next
    /// validation pass or by refocusing the field. Only password alerts
    /// are persistent.
    pub persistent: bool,
}

impl Alert {
    /// Build an alert for a slot, splitting multi-line messages.
    pub fn new(slot: AlertSlot, message: &str, shown_at: DateTime<Utc>) -> Self {
        let kind = match slot {
            AlertSlot::Success => AlertKind::Success,
            AlertSlot::General => AlertKind::General,
            AlertSlot::Field(_) => AlertKind::Error,
        };
        Self {
            slot,
            kind,
            lines: message.lines().map(str::to_string).collect(),
            shown_at,
            persistent: matches!(slot, AlertSlot::Field(FieldId::Password)),
        }
    }

    /// The full message, lines rejoined.
    pub fn message(&self) -> String {
        self.lines.join("\n")
    }
}

/// Pure alert state container.
///
/// Guarantees: at most one alert per slot (showing displaces the previous
/// one), clearing is idempotent, and error marks are derived from active
/// field alerts so a field can never carry a mark without an alert.
#[derive(Debug, Default)]
pub struct AlertBoard {
    active: HashMap<AlertSlot, Alert>,
}

impl AlertBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an alert, returning the alert it displaced, if any.
    pub fn show(&mut self, alert: Alert) -> Option<Alert> {
        self.active.insert(alert.slot, alert)
    }

    /// Clear a slot. No-op (returns `None`) when nothing is showing.
    pub fn clear(&mut self, slot: AlertSlot) -> Option<Alert> {
        self.active.remove(&slot)
    }

    /// Clear every slot, returning the alerts that were visible.
    pub fn clear_all(&mut self) -> Vec<Alert> {
        self.active.drain().map(|(_, alert)| alert).collect()
    }

    pub fn get(&self, slot: AlertSlot) -> Option<&Alert> {
        self.active.get(&slot)
    }

    pub fn is_visible(&self, slot: AlertSlot) -> bool {
        self.active.contains_key(&slot)
    }

    /// Whether a field currently carries an error mark.
    pub fn error_marked(&self, field: FieldId) -> bool {
        self.active.contains_key(&AlertSlot::Field(field))
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(slot: AlertSlot, message: &str) -> Alert {
        Alert::new(slot, message, Utc::now())
    }

    #[test]
    fn showing_twice_keeps_only_the_latest() {
        let mut board = AlertBoard::new();
        let slot = AlertSlot::Field(FieldId::Email);

        assert!(board.show(alert(slot, "first")).is_none());
        let displaced = board.show(alert(slot, "second")).unwrap();

        assert_eq!(displaced.message(), "first");
        assert_eq!(board.len(), 1);
        assert_eq!(board.get(slot).unwrap().message(), "second");
    }

    #[test]
    fn clear_is_idempotent() {
        let mut board = AlertBoard::new();
        let slot = AlertSlot::Field(FieldId::Name);

        board.show(alert(slot, "Please enter your name"));
        assert!(board.clear(slot).is_some());
        assert!(board.clear(slot).is_none());
        assert!(board.clear(slot).is_none());
    }

    #[test]
    fn clear_all_leaves_nothing_visible_or_marked() {
        let mut board = AlertBoard::new();
        board.show(alert(AlertSlot::Field(FieldId::Name), "a"));
        board.show(alert(AlertSlot::Field(FieldId::Password), "b\nc"));
        board.show(alert(AlertSlot::General, "d"));

        let removed = board.clear_all();
        assert_eq!(removed.len(), 3);
        assert!(board.is_empty());
        assert!(!board.error_marked(FieldId::Name));
        assert!(!board.error_marked(FieldId::Password));
    }

    #[test]
    fn error_marks_follow_field_alerts_only() {
        let mut board = AlertBoard::new();
        board.show(alert(AlertSlot::Success, "welcome"));
        board.show(alert(AlertSlot::Field(FieldId::Terms), "agree first"));

        assert!(board.error_marked(FieldId::Terms));
        assert!(!board.error_marked(FieldId::Name));
    }

    #[test]
    fn password_alerts_are_persistent_and_multiline() {
        let a = alert(
            AlertSlot::Field(FieldId::Password),
            "• line one\n• line two",
        );
        assert!(a.persistent);
        assert_eq!(a.lines.len(), 2);
        assert_eq!(a.kind, AlertKind::Error);

        let b = alert(AlertSlot::Field(FieldId::Email), "one line");
        assert!(!b.persistent);
        assert_eq!(b.lines, vec!["one line"]);
    }

    #[test]
    fn slot_determines_kind() {
        assert_eq!(alert(AlertSlot::Success, "x").kind, AlertKind::Success);
        assert_eq!(alert(AlertSlot::General, "x").kind, AlertKind::General);
        assert_eq!(
            alert(AlertSlot::Field(FieldId::Name), "x").kind,
            AlertKind::Error
        );
    }
}

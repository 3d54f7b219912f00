//! In-memory form surface for tests and headless use.

use crate::alerts::{Alert, AlertSlot};
use crate::decor::Particle;
use crate::form::{FieldId, RegistrationInput};
use crate::surface::FormSurface;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};

#[derive(Default)]
struct FormModel {
    name: String,
    email: String,
    password: String,
    terms_accepted: bool,
    busy: bool,
    busy_changes: Vec<bool>,
    focused: Option<FieldId>,
    alerts: HashMap<AlertSlot, Vec<String>>,
    error_marks: HashSet<FieldId>,
    scaled: HashSet<FieldId>,
    meter: (u8, String),
    particles: usize,
    scroll_targets: Vec<String>,
    reset_count: usize,
}

/// A [`FormSurface`] backed by plain memory instead of a DOM.
///
/// Doubles as the test harness: every side effect the flow performs is
/// observable through the query methods.
#[derive(Default)]
pub struct HeadlessForm {
    model: Mutex<FormModel>,
}

impl HeadlessForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all four fields at once, as a user filling in the form would.
    pub fn fill(&self, name: &str, email: &str, password: &str, terms_accepted: bool) {
        let mut model = self.model.lock();
        model.name = name.to_string();
        model.email = email.to_string();
        model.password = password.to_string();
        model.terms_accepted = terms_accepted;
    }

    // -- queries used by tests --

    pub fn busy(&self) -> bool {
        self.model.lock().busy
    }

    /// Every `set_busy` call in order, e.g. `[true, false]` for one
    /// successful submission.
    pub fn busy_changes(&self) -> Vec<bool> {
        self.model.lock().busy_changes.clone()
    }

    pub fn focused(&self) -> Option<FieldId> {
        self.model.lock().focused
    }

    pub fn alert_lines(&self, slot: AlertSlot) -> Option<Vec<String>> {
        self.model.lock().alerts.get(&slot).cloned()
    }

    pub fn alert_count(&self) -> usize {
        self.model.lock().alerts.len()
    }

    pub fn is_marked(&self, field: FieldId) -> bool {
        self.model.lock().error_marks.contains(&field)
    }

    pub fn is_scaled(&self, field: FieldId) -> bool {
        self.model.lock().scaled.contains(&field)
    }

    pub fn meter(&self) -> (u8, String) {
        self.model.lock().meter.clone()
    }

    pub fn particle_count(&self) -> usize {
        self.model.lock().particles
    }

    pub fn scroll_targets(&self) -> Vec<String> {
        self.model.lock().scroll_targets.clone()
    }

    pub fn reset_count(&self) -> usize {
        self.model.lock().reset_count
    }
}

impl FormSurface for HeadlessForm {
    fn read_input(&self) -> RegistrationInput {
        let model = self.model.lock();
        RegistrationInput {
            name: model.name.clone(),
            email: model.email.clone(),
            password: model.password.clone(),
            terms_accepted: model.terms_accepted,
        }
    }

    fn render_alert(&self, alert: &Alert) {
        self.model
            .lock()
            .alerts
            .insert(alert.slot, alert.lines.clone());
    }

    fn remove_alert(&self, slot: AlertSlot) {
        self.model.lock().alerts.remove(&slot);
    }

    fn mark_error(&self, field: FieldId) {
        self.model.lock().error_marks.insert(field);
    }

    fn unmark_error(&self, field: FieldId) {
        self.model.lock().error_marks.remove(&field);
    }

    fn focus(&self, field: FieldId) {
        self.model.lock().focused = Some(field);
    }

    fn set_busy(&self, busy: bool) {
        let mut model = self.model.lock();
        model.busy = busy;
        model.busy_changes.push(busy);
    }

    fn reset_fields(&self) {
        let mut model = self.model.lock();
        model.name.clear();
        model.email.clear();
        model.password.clear();
        model.terms_accepted = false;
        model.reset_count += 1;
    }

    fn set_strength_meter(&self, percent: u8, color: &str) {
        self.model.lock().meter = (percent, color.to_string());
    }

    fn spawn_particle(&self, _particle: &Particle) {
        self.model.lock().particles += 1;
    }

    fn scroll_to(&self, target: &str) {
        self.model.lock().scroll_targets.push(target.to_string());
    }

    fn set_focus_scale(&self, field: FieldId, focused: bool) {
        let mut model = self.model.lock();
        if focused {
            model.scaled.insert(field);
        } else {
            model.scaled.remove(&field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_input_snapshots_current_values() {
        let form = HeadlessForm::new();
        form.fill("Ada", "ada@example.com", "Engine#1", true);

        let input = form.read_input();
        assert_eq!(input.name, "Ada");
        assert_eq!(input.email, "ada@example.com");
        assert_eq!(input.password, "Engine#1");
        assert!(input.terms_accepted);
    }

    #[test]
    fn reset_clears_fields_and_counts() {
        let form = HeadlessForm::new();
        form.fill("Ada", "ada@example.com", "Engine#1", true);
        form.reset_fields();

        let input = form.read_input();
        assert_eq!(input.name, "");
        assert!(!input.terms_accepted);
        assert_eq!(form.reset_count(), 1);
    }

    #[test]
    fn busy_changes_are_recorded_in_order() {
        let form = HeadlessForm::new();
        form.set_busy(true);
        form.set_busy(false);
        assert_eq!(form.busy_changes(), vec![true, false]);
        assert!(!form.busy());
    }

    #[test]
    fn focus_scale_toggles() {
        let form = HeadlessForm::new();
        form.set_focus_scale(FieldId::Email, true);
        assert!(form.is_scaled(FieldId::Email));
        form.set_focus_scale(FieldId::Email, false);
        assert!(!form.is_scaled(FieldId::Email));
    }
}

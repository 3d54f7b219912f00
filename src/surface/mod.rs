//! The external collaborator interface: everything the crate needs from
//! the host page, reduced to one trait.
//!
//! A browser embedding implements [`FormSurface`] over the real DOM; the
//! crate ships [`HeadlessForm`], an in-memory implementation used by the
//! test suite and suitable as a reference.

mod headless;

pub use headless::HeadlessForm;

use crate::alerts::{Alert, AlertSlot};
use crate::decor::Particle;
use crate::form::{FieldId, RegistrationInput};

/// Side-effect sink and input source for the registration form.
///
/// All methods are synchronous: they correspond to direct DOM mutations on
/// the single UI thread. Implementations must be thread-safe so scheduled
/// tasks (alert expiry, particles) can reach them.
pub trait FormSurface: Send + Sync {
    /// Snapshot the current field values into a registration record.
    fn read_input(&self) -> RegistrationInput;

    /// Render an alert. Field alerts attach to the field's container;
    /// multi-line alerts render one item per line inside a persistent
    /// container.
    fn render_alert(&self, alert: &Alert);

    /// Remove the alert on a slot, if present.
    fn remove_alert(&self, slot: AlertSlot);

    /// Flag a field's container with the error style.
    fn mark_error(&self, field: FieldId);

    /// Remove a field container's error style.
    fn unmark_error(&self, field: FieldId);

    /// Move input focus to a field.
    fn focus(&self, field: FieldId);

    /// Toggle the submit control between its default label and the busy
    /// indicator, disabling it while busy.
    fn set_busy(&self, busy: bool);

    /// Reset every field to its default value.
    fn reset_fields(&self);

    /// Update the strength meter: width as a percentage, band color.
    fn set_strength_meter(&self, percent: u8, color: &str);

    /// Spawn a decorative particle; the renderer removes it when its
    /// animation completes.
    fn spawn_particle(&self, particle: &Particle);

    /// Smooth-scroll to a same-page anchor target.
    fn scroll_to(&self, target: &str);

    /// Cosmetic scale transform on a field's container on focus/blur.
    fn set_focus_scale(&self, field: FieldId, focused: bool);
}

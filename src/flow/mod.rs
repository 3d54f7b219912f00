//! Registration flow orchestration.
//!
//! Drives one submission end to end: guard → validate → present feedback →
//! simulated asynchronous registration → success alert → form reset. Every
//! state transition is recorded in an immutable history.

mod config;

pub use config::FlowConfig;

use crate::alerts::{AlertPresenter, AlertSlot};
use crate::core::{Guard, State, StateHistory, StateTransition};
use crate::decor;
use crate::form::{validate, FieldId, FormError};
use crate::policy::{score, StrengthBand};
use crate::schedule::TaskHandle;
use crate::state_enum;
use crate::surface::FormSurface;
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

state_enum! {
    /// Lifecycle of the registration flow. Cyclic: every submission ends
    /// back at `Idle`, whether rejected or successful.
    pub enum FlowState {
        Idle,
        Validating,
        Submitting,
        Success,
    }
}

/// Errors from driving the flow itself. Validation failures are outcomes,
/// not errors; see [`SubmitOutcome`].
#[derive(Debug, Error)]
pub enum FlowError {
    /// The re-submission guard rejected a submit while one was in flight.
    #[error("submission already in progress (state: {state})")]
    SubmissionInProgress { state: String },
}

/// How a submission ended.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Registered successfully under the submitted (trimmed) name.
    Registered { name: String },
    /// Validation rejected the input; the error was presented on its field.
    Rejected(FormError),
}

/// Orchestrates validation, alert presentation, and the simulated
/// registration call.
///
/// Constructed once at startup and held for the page session; no teardown
/// needed. Methods take `&self` so the flow can be shared with event
/// handlers; the explicit guard makes concurrent submits fail fast instead
/// of overlapping.
pub struct RegistrationFlow {
    surface: Arc<dyn FormSurface>,
    alerts: AlertPresenter,
    config: FlowConfig,
    state: Mutex<FlowState>,
    history: Mutex<StateHistory<FlowState>>,
    submit_guard: Guard<FlowState>,
}

impl RegistrationFlow {
    pub fn new(surface: Arc<dyn FormSurface>, config: FlowConfig) -> Self {
        let alerts = AlertPresenter::new(surface.clone(), config.alert_ttl);
        Self {
            surface,
            alerts,
            config,
            state: Mutex::new(FlowState::Idle),
            history: Mutex::new(StateHistory::new()),
            submit_guard: Guard::new(|s: &FlowState| matches!(s, FlowState::Idle)),
        }
    }

    /// Run one submission.
    ///
    /// Validation always completes synchronously before any alert is
    /// shown, and the alert-clearing pass happens-before any new alert.
    /// On valid input the submit control is disabled for the duration of
    /// the simulated registration delay, then a success alert parameterized
    /// by the submitted name is shown and the form is reset.
    pub async fn submit(&self) -> Result<SubmitOutcome, FlowError> {
        self.begin_validation()?;
        self.alerts.clear_all();

        let input = self.surface.read_input().normalized();
        match validate(&input) {
            Err(error) => {
                warn!(field = error.field().name(), "submission rejected");
                self.alerts
                    .show(AlertSlot::Field(error.field()), &error.to_string());
                self.transition(FlowState::Idle);
                Ok(SubmitOutcome::Rejected(error))
            }
            Ok(()) => {
                self.transition(FlowState::Submitting);
                self.surface.set_busy(true);
                tokio::time::sleep(self.config.submit_delay).await;

                self.transition(FlowState::Success);
                self.alerts.show(
                    AlertSlot::Success,
                    &format!("Registration successful! Welcome {}!", input.name),
                );
                self.surface.reset_fields();
                self.surface.set_busy(false);
                self.transition(FlowState::Idle);
                info!(name = %input.name, "registration complete");
                Ok(SubmitOutcome::Registered { name: input.name })
            }
        }
    }

    /// Strength-meter hook for password input events. An empty password
    /// resets the meter.
    pub fn password_changed(&self, password: &str) {
        if password.is_empty() {
            self.surface
                .set_strength_meter(0, StrengthBand::Weak.hex());
            return;
        }
        let strength = score(password);
        self.surface
            .set_strength_meter(strength, StrengthBand::of(strength).hex());
    }

    /// Focus hook: cosmetic scale plus alert acknowledgement for the
    /// focused field only.
    pub fn field_focused(&self, field: FieldId) {
        self.surface.set_focus_scale(field, true);
        self.alerts.acknowledge_focus(field);
    }

    /// Blur hook: undo the cosmetic scale.
    pub fn field_blurred(&self, field: FieldId) {
        self.surface.set_focus_scale(field, false);
    }

    /// Start the decorative particle interval at the configured period.
    ///
    /// The embedding owns the returned handle; cancelling it stops the
    /// spawning. Must be called within a Tokio runtime.
    pub fn start_particles(&self) -> TaskHandle {
        decor::start_particles(self.surface.clone(), self.config.particle_period)
    }

    pub fn state(&self) -> FlowState {
        self.state.lock().clone()
    }

    pub fn history(&self) -> StateHistory<FlowState> {
        self.history.lock().clone()
    }

    pub fn alerts(&self) -> &AlertPresenter {
        &self.alerts
    }

    /// Guarded entry into `Validating`: checked and applied under one lock
    /// so two submits cannot both pass.
    fn begin_validation(&self) -> Result<(), FlowError> {
        let from = {
            let mut state = self.state.lock();
            if !self.submit_guard.check(&state) {
                return Err(FlowError::SubmissionInProgress {
                    state: state.name().to_string(),
                });
            }
            std::mem::replace(&mut *state, FlowState::Validating)
        };
        self.record(from, FlowState::Validating);
        Ok(())
    }

    fn transition(&self, to: FlowState) {
        let from = std::mem::replace(&mut *self.state.lock(), to.clone());
        self.record(from, to);
    }

    fn record(&self, from: FlowState, to: FlowState) {
        debug!(from = from.name(), to = to.name(), "flow transition");
        let mut history = self.history.lock();
        *history = history.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
        });
    }
}

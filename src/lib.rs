//! Regflow: registration form validation and feedback flow
//!
//! Regflow follows a "pure core, imperative shell" split. The core
//! (password policy scoring, form validation, and the alert board that
//! enforces at-most-one-alert-per-field) is made of pure functions and
//! value types. Side effects (rendering, focus, timers, the simulated
//! registration call) are confined to the presenter and flow layers, which
//! talk to the host page through the [`surface::FormSurface`] trait.
//!
//! # Core Concepts
//!
//! - **Policy**: pure password strength scoring and rule checking, with all
//!   violations accumulated instead of failing fast
//! - **Validation**: a single actionable error per submission, in a fixed,
//!   most-fixable-first order
//! - **Alerts**: one visible alert per field, cancellable auto-expiry,
//!   refocus-acknowledges semantics
//! - **Flow**: Idle → Validating → Submitting → Success → Idle, with an
//!   explicit re-submission guard and a recorded transition history
//!
//! # Example
//!
//! ```rust
//! use regflow::{validate, FieldId, RegistrationInput};
//!
//! let input = RegistrationInput {
//!     name: "Ada Lovelace".to_string(),
//!     email: "ada@example.com".to_string(),
//!     password: "Engine#1".to_string(),
//!     terms_accepted: true,
//! };
//! assert!(validate(&input).is_ok());
//!
//! let missing = RegistrationInput {
//!     name: "  ".to_string(),
//!     ..input
//! };
//! let err = validate(&missing).unwrap_err();
//! assert_eq!(err.field(), FieldId::Name);
//! assert_eq!(err.to_string(), "Please enter your name");
//! ```

pub mod alerts;
pub mod core;
pub mod decor;
pub mod flow;
pub mod form;
pub mod policy;
pub mod schedule;
pub mod surface;

// Re-export commonly used types
pub use alerts::{Alert, AlertBoard, AlertKind, AlertPresenter, AlertSlot};
pub use core::{Guard, State, StateHistory, StateTransition};
pub use flow::{FlowConfig, FlowError, FlowState, RegistrationFlow, SubmitOutcome};
pub use form::{validate, FieldId, FormError, RegistrationInput};
pub use policy::{check_requirements, score, RuleViolation, StrengthBand};
pub use surface::{FormSurface, HeadlessForm};

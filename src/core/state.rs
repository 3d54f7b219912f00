//! Core State trait for lifecycle states.
//!
//! The registration flow's lifecycle is described by an enum implementing
//! this trait, which provides pure methods for inspecting state properties.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for lifecycle states.
///
/// All methods are pure. States are immutable values describing the current
/// position in a state machine; they must be cloneable (history tracking),
/// comparable (transition logic), debuggable, and serializable.
///
/// # Example
///
/// ```rust
/// use regflow::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum SubmissionState {
///     Idle,
///     InFlight,
///     Done,
/// }
///
/// impl State for SubmissionState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Idle => "Idle",
///             Self::InFlight => "InFlight",
///             Self::Done => "Done",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Done)
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// The registration flow is cyclic (it always returns to Idle), so its
    /// states keep the default `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    fn is_error(&self) -> bool {
        false
    }
}

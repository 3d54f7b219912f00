//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions evaluated before a transition is
//! attempted. The registration flow uses one to reject re-submission while
//! a submission is already in flight.

use super::state::State;
use std::marker::PhantomData;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use regflow::core::Guard;
/// use regflow::flow::FlowState;
///
/// let submit_allowed = Guard::new(|s: &FlowState| matches!(s, FlowState::Idle));
///
/// assert!(submit_allowed.check(&FlowState::Idle));
/// assert!(!submit_allowed.check(&FlowState::Submitting));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard allows transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

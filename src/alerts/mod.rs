//! Alert lifecycle: one visible alert per slot, auto-expiry, refocus
//! acknowledgement.
//!
//! The pure [`AlertBoard`] holds the state and enforces the invariants; the
//! [`AlertPresenter`] wraps it with side effects: rendering through the
//! form surface and scheduling cancellable expiry tasks.

mod board;
mod presenter;

pub use board::{Alert, AlertBoard, AlertKind, AlertSlot};
pub use presenter::AlertPresenter;

//! Per-item request state machine.

use serde::{Deserialize, Serialize};

/// Lifecycle of one generated value: `Idle -> Pending -> Ready | Failed`.
///
/// A slot refuses to begin a new request while one is pending, so double
/// submission is prevented by construction: the UI disables the
/// triggering control, and the slot enforces the same rule. There is no
/// cancellation; a superseded request's late resolution simply lands in a
/// slot nobody is displaying anymore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Slot<T> {
    Idle,
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Idle
    }
}

impl<T> Slot<T> {
    /// Move to `Pending`, discarding any previous value. Returns `false`
    /// and leaves the slot untouched if a request is already in flight.
    pub fn begin(&mut self) -> bool {
        if matches!(self, Slot::Pending) {
            return false;
        }
        *self = Slot::Pending;
        true
    }

    /// Resolve the pending request with a value.
    pub fn resolve(&mut self, value: T) {
        *self = Slot::Ready(value);
    }

    /// Fail the pending request with a user-facing message.
    pub fn fail(&mut self, message: impl Into<String>) {
        *self = Slot::Failed(message.into());
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Slot::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Slot::Pending)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Slot::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Slot::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Slot::Failed(message) => Some(message),
            _ => None,
        }
    }
}

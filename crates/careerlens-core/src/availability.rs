//! Two-variant outcome for optional enhancement paths.
//!
//! Semantic ranking and AI narrative generation can be absent or fail at call
//! time. Neither is an error from the caller's point of view: the caller picks
//! a local path instead. `Availability` makes that choice a visible branch.

use std::fmt;

/// Outcome of an optional enhancement path.
#[derive(Debug, Clone, PartialEq)]
pub enum Availability<T> {
    /// The enhancement ran and produced a value.
    Ready(T),
    /// The enhancement is absent or failed; `reason` is for logs only.
    Unavailable { reason: String },
}

impl<T> Availability<T> {
    /// Build an `Unavailable` outcome from anything displayable.
    pub fn unavailable(reason: impl fmt::Display) -> Self {
        Self::Unavailable {
            reason: reason.to_string(),
        }
    }

    /// Collapse a fallible call into an availability outcome.
    pub fn from_result<E: fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::unavailable(e),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// The value, if ready.
    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Unavailable { .. } => None,
        }
    }
}

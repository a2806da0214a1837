//! Error types for the simulation kernel

use thiserror::Error;

use crate::body::BodyId;

/// Result type for kernel operations
pub type SimResult<T> = Result<T, SimError>;

/// Errors surfaced by the kernel. All of them are precondition violations
/// reported to the caller; nothing is retried internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("bodies {first} and {second} coincide; no line of centres")]
    DegenerateConfiguration { first: BodyId, second: BodyId },

    #[error("a system needs at least one body")]
    EmptySystem,

    #[error("expected {expected} entries, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl SimError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        SimError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

/// Reject anything that is not a finite, strictly positive number.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> SimResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::invalid(name, value, "must be finite and > 0"))
    }
}

//! Group error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroupError {
    #[error("Unknown trigger mode: {0}")]
    UnknownTrigger(String),

    #[error("Unknown tab type: {0}")]
    UnknownTabType(String),
}

/// Failure reported by a transition guard.
///
/// Every variant is treated as a veto by the activation protocol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuardError {
    #[error("Transition rejected: {0}")]
    Rejected(String),

    #[error("Transition guard panicked")]
    Panicked,
}

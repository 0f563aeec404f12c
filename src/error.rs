//! Error types for policy construction and the harness.
//!
//! Exhausting the depth budget is not represented here: an
//! [`Outcome::Overflow`](crate::types::Outcome) is a documented terminal
//! state, not a fault.

/// Rejected policy parameters.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum PolicyError {
    /// The continue probability was NaN or infinite.
    #[error("continue probability must be a finite number")]
    ProbabilityNotFinite,

    /// The continue probability fell outside the closed unit interval.
    #[error("continue probability {value} is outside [0.0, 1.0]")]
    ProbabilityOutOfRange {
        /// The rejected value.
        value: f64,
    },
}

/// Rejected harness configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HarnessError {
    /// A batch of zero runs has no distribution to report on.
    #[error("harness requires at least one run")]
    ZeroRuns,
}

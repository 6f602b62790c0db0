//! Error types for eleoro-behavior.

use thiserror::Error;

/// Result type for eleoro-behavior operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a behavior declines to engage.
///
/// None of these are fatal: the browser layer logs them and leaves the
/// affected section of the page inert.
#[derive(Debug, Error)]
pub enum Error {
    /// A node's declared angle is not a finite number.
    #[error("invalid angle attribute: {0:?}")]
    InvalidAngle(String),

    /// Progress dots and roadmap steps disagree in number.
    #[error("step/dot mismatch: {steps} steps, {dots} dots")]
    StepDotMismatch { steps: usize, dots: usize },

    /// There are no steps to synchronize.
    #[error("roadmap has no steps")]
    EmptySequence,

    /// An element a behavior depends on is absent from the page.
    #[error("missing element: {0}")]
    MissingElement(&'static str),

    /// Configuration parsed but holds out-of-range values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration is not valid JSON.
    #[error("configuration parse error: {0}")]
    Json(#[from] serde_json::Error),
}

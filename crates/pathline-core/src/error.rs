// File: crates/pathline-core/src/error.rs
// Summary: Error type for chart construction and marker advances.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("need at least 2 distinct sample positions, got {0}")]
    TooFewSamples(usize),
    #[error("an animation is already running")]
    AnimationInProgress,
    #[error("target {0} is the current position")]
    TargetIsCurrent(f64),
    #[error("target {target} outside [{min}, {max}]")]
    TargetOutOfRange { target: f64, min: f64, max: f64 },
    #[error("position {0} does not address a sample")]
    NotASample(f64),
    #[error("sample x values must be finite")]
    NonFiniteX,
    #[error("no position other than {0} to move to")]
    NoOtherTarget(f64),
}

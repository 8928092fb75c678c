//! Estimation error types.
//!
//! Every variant is a caller error: the offending request must be
//! rejected before any arithmetic is attempted. Unresolved locations are
//! deliberately NOT an error (the estimator substitutes a default
//! distance instead), so they do not appear here.

use super::{InvalidEfficiency, InvalidFuelType, InvalidTransitMode};

/// Invalid input supplied to the trip estimator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    /// Vehicle efficiency was zero, negative or not finite.
    #[error("invalid input: {0}")]
    Efficiency(#[from] InvalidEfficiency),

    /// The fuel type string was not a recognised fuel.
    #[error("invalid input: {0}")]
    FuelType(#[from] InvalidFuelType),

    /// The transit mode string was not a recognised sub-mode.
    #[error("invalid input: {0}")]
    TransitMode(#[from] InvalidTransitMode),
}

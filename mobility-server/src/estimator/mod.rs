//! Trip estimation across travel modes.
//!
//! The estimator answers: "for this trip, how do the private vehicle,
//! public transit, bicycle and walking compare?" It resolves the
//! distance, runs the emission/cost/speed/points models, matches a
//! transit itinerary and packages the result as one value object.

mod estimate;
mod format;

pub use estimate::{
    ActiveModeReport, EstimateRequest, Estimator, PrivateVehicleReport, TransitReport,
    TripComparison,
};
pub use format::format_duration;

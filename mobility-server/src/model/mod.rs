//! Static lookup tables and per-mode calculations.
//!
//! Emission factors, speeds, prices and the points policy are plain data
//! with `Default` impls carrying the reference constants. They are built
//! once at startup and passed by reference into the estimator; nothing
//! here is global or mutable.

mod activity;
mod cost;
mod emissions;
mod points;
mod speed;

pub use activity::ActivityModel;
pub use cost::{CostTable, LITRES_PER_US_GALLON};
pub use emissions::{
    AlternativeEmissions, EmissionComparison, EmissionFactors, PrivateVehicleEmissions,
    compare_emissions,
};
pub use points::PointsSchedule;
pub use speed::SpeedTable;

/// The full set of static tables the estimator needs.
///
/// `ModelTables::default()` is the reference configuration.
#[derive(Debug, Clone, Default)]
pub struct ModelTables {
    pub emissions: EmissionFactors,
    pub costs: CostTable,
    pub speeds: SpeedTable,
    pub points: PointsSchedule,
    pub activity: ActivityModel,
}

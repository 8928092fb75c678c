//! Reward points policy.

use crate::domain::TravelMode;

/// Per-kilometre reward multipliers.
///
/// One explicit policy table instead of inline magic numbers, so the
/// schedule can be tuned without touching the estimator. The private
/// vehicle earns nothing; more effortful modes earn more per km.
#[derive(Debug, Clone)]
pub struct PointsSchedule {
    pub transit_per_km: f64,
    pub bicycle_per_km: f64,
    pub walking_per_km: f64,
    pub private_vehicle_per_km: f64,
}

impl PointsSchedule {
    /// Points awarded for a trip: rate × distance, rounded to the
    /// nearest whole point.
    pub fn points_for(&self, mode: TravelMode, distance_km: f64) -> u32 {
        let rate = match mode {
            TravelMode::PrivateVehicle => self.private_vehicle_per_km,
            TravelMode::Transit(_) => self.transit_per_km,
            TravelMode::Bicycle => self.bicycle_per_km,
            TravelMode::Walking => self.walking_per_km,
        };

        (rate * distance_km).round() as u32
    }
}

impl Default for PointsSchedule {
    fn default() -> Self {
        Self {
            transit_per_km: 5.0,
            bicycle_per_km: 8.0,
            walking_per_km: 12.0,
            private_vehicle_per_km: 0.0,
        }
    }
}

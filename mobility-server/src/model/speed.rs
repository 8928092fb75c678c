//! Average-speed table and travel time estimation.

use std::collections::HashMap;

use crate::domain::{TransitMode, TravelMode};

/// Average operating speeds per travel mode, in km/h.
///
/// Speeds are urban averages, traffic included. The table is data: a
/// mode with no entry falls back to [`SpeedTable::default_kmh`] rather
/// than failing, so customised tables degrade predictably.
#[derive(Debug, Clone)]
pub struct SpeedTable {
    speeds: HashMap<TravelMode, f64>,
    default_kmh: f64,
}

impl SpeedTable {
    /// Create a table with the given entries and fallback speed.
    pub fn new(speeds: HashMap<TravelMode, f64>, default_kmh: f64) -> Self {
        Self {
            speeds,
            default_kmh,
        }
    }

    /// Average speed for a mode, or the fallback when the table has no
    /// entry for it.
    pub fn speed_kmh(&self, mode: TravelMode) -> f64 {
        self.speeds.get(&mode).copied().unwrap_or(self.default_kmh)
    }

    /// Fallback speed for modes missing from the table.
    pub fn default_kmh(&self) -> f64 {
        self.default_kmh
    }

    /// Estimated travel time in minutes for a distance at a mode's
    /// average speed. Pure and total: no failure modes.
    pub fn travel_time_minutes(&self, distance_km: f64, mode: TravelMode) -> f64 {
        (distance_km / self.speed_kmh(mode)) * 60.0
    }
}

impl Default for SpeedTable {
    fn default() -> Self {
        let mut speeds = HashMap::new();
        speeds.insert(TravelMode::PrivateVehicle, 25.0);
        speeds.insert(TravelMode::Transit(TransitMode::Metro), 35.0);
        speeds.insert(TravelMode::Transit(TransitMode::Trolley), 18.0);
        speeds.insert(TravelMode::Transit(TransitMode::Busway), 20.0);
        speeds.insert(TravelMode::Transit(TransitMode::Bus), 15.0);
        speeds.insert(TravelMode::Bicycle, 15.0);
        speeds.insert(TravelMode::Walking, 5.0);

        Self {
            speeds,
            default_kmh: 20.0,
        }
    }
}

//! Physical-activity estimates for the active modes.

use crate::domain::TravelMode;

/// Calorie and step-count factors for bicycle and walking trips.
#[derive(Debug, Clone)]
pub struct ActivityModel {
    pub bicycle_calories_per_km: f64,
    pub walking_calories_per_km: f64,
    pub walking_steps_per_km: f64,
}

impl ActivityModel {
    /// Estimated calories burned, for the active modes only.
    pub fn calories_for(&self, mode: TravelMode, distance_km: f64) -> Option<u32> {
        let per_km = match mode {
            TravelMode::Bicycle => self.bicycle_calories_per_km,
            TravelMode::Walking => self.walking_calories_per_km,
            _ => return None,
        };

        Some((per_km * distance_km).round() as u32)
    }

    /// Estimated step count for a walking trip.
    pub fn steps_for(&self, distance_km: f64) -> u32 {
        (self.walking_steps_per_km * distance_km).round() as u32
    }
}

impl Default for ActivityModel {
    fn default() -> Self {
        Self {
            bicycle_calories_per_km: 45.0,
            walking_calories_per_km: 65.0,
            walking_steps_per_km: 1300.0,
        }
    }
}

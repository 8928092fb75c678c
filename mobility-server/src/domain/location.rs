//! Named locations and their coordinates.

use serde::{Deserialize, Serialize};

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates from decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude and longitude converted to radians, for spherical math.
    pub fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

/// A named reference point in the city.
///
/// Locations are immutable reference data: the registry is seeded once at
/// startup and never edited by callers. The zone tag is descriptive only
/// and plays no part in any calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub coordinates: Coordinates,
    pub zone: String,
}

impl Location {
    /// Create a location with the given name, position and zone tag.
    pub fn new(name: impl Into<String>, coordinates: Coordinates, zone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            coordinates,
            zone: zone.into(),
        }
    }
}

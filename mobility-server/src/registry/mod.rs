//! Named-location registry and distance resolution.
//!
//! The engine works over a fixed registry of named city locations rather
//! than free-form geocoding. Lookups are case-insensitive on the exact
//! name. When either endpoint of a trip is unknown, distance resolution
//! degrades to a fixed default instead of failing; the caller can see
//! from the result which of the two happened.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Coordinates, Location};
use crate::geo;

/// Distance substituted when either trip endpoint is not in the registry.
pub const DEFAULT_DISTANCE_KM: f64 = 10.0;

/// How a trip distance was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceSource {
    /// Both endpoints were found; the distance is the great-circle
    /// distance between them.
    Resolved,
    /// At least one endpoint was unknown; the distance is
    /// [`DEFAULT_DISTANCE_KM`].
    Fallback,
}

/// A trip distance together with how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedDistance {
    pub km: f64,
    pub source: DistanceSource,
}

/// Immutable registry of named locations.
///
/// Built once at startup and shared read-only for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    /// Locations in insertion order, for listing.
    locations: Vec<Location>,
    /// Lowercased name → index into `locations`.
    by_name: HashMap<String, usize>,
}

impl LocationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a location by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&Location> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&i| &self.locations[i])
    }

    /// All locations in registration order.
    pub fn all(&self) -> &[Location] {
        &self.locations
    }

    /// Number of registered locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if the registry has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Resolve the trip distance between two named locations.
    ///
    /// Both names found → haversine distance, [`DistanceSource::Resolved`].
    /// Either name unknown → [`DEFAULT_DISTANCE_KM`] with
    /// [`DistanceSource::Fallback`]. The fallback is a soft condition,
    /// not an error; it is logged so that lookup misses stay visible.
    pub fn resolve_distance(&self, origin: &str, destination: &str) -> ResolvedDistance {
        match (self.get(origin), self.get(destination)) {
            (Some(from), Some(to)) => ResolvedDistance {
                km: geo::distance_km(&from.coordinates, &to.coordinates),
                source: DistanceSource::Resolved,
            },
            _ => {
                debug!(origin, destination, "unresolved endpoint, using default distance");
                ResolvedDistance {
                    km: DEFAULT_DISTANCE_KM,
                    source: DistanceSource::Fallback,
                }
            }
        }
    }
}

/// Builder for creating a location registry.
#[derive(Debug, Default)]
pub struct LocationRegistryBuilder {
    inner: LocationRegistry,
}

impl LocationRegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location. A later entry with the same name (ignoring case)
    /// replaces the earlier one.
    pub fn add(mut self, name: &str, latitude: f64, longitude: f64, zone: &str) -> Self {
        let location = Location::new(name, Coordinates::new(latitude, longitude), zone);
        let key = name.to_lowercase();

        match self.inner.by_name.get(&key) {
            Some(&i) => self.inner.locations[i] = location,
            None => {
                self.inner.by_name.insert(key, self.inner.locations.len());
                self.inner.locations.push(location);
            }
        }
        self
    }

    /// Build the registry.
    pub fn build(self) -> LocationRegistry {
        self.inner
    }
}

/// The reference registry of Quito locations.
///
/// Eleven named points across the city's Norte/Centro/Sur/Valle zones,
/// with approximate coordinates.
pub fn quito_locations() -> LocationRegistry {
    LocationRegistryBuilder::new()
        .add("La Carolina", -0.1807, -78.4678, "Norte")
        .add("Centro Histórico", -0.2201, -78.5123, "Centro")
        .add("La Mariscal", -0.1955, -78.4834, "Norte")
        .add("Cumbayá", -0.2089, -78.4234, "Valle")
        .add("El Recreo", -0.2567, -78.5234, "Sur")
        .add("Quitumbe", -0.289, -78.5456, "Sur")
        .add("La Y", -0.1678, -78.4567, "Norte")
        .add("El Labrador", -0.1456, -78.4789, "Norte")
        .add("Plaza Foch", -0.1934, -78.4845, "Norte")
        .add("Terminal Terrestre", -0.2678, -78.5345, "Sur")
        .add("Aeropuerto", -0.1289, -78.3567, "Norte")
        .build()
}

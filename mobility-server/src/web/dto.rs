//! Data transfer objects for web requests and responses.
//!
//! The comparison result itself serializes directly (it is a pure value
//! object), so only the request side and the small listing endpoints
//! need dedicated types here.

use serde::{Deserialize, Serialize};

use crate::domain::Location;
use crate::estimator::EstimateRequest;

/// Request to estimate a trip.
#[derive(Debug, Deserialize)]
pub struct EstimateTripRequest {
    /// Origin location name
    pub origin: String,

    /// Destination location name
    pub destination: String,

    /// The caller's private vehicle, for the baseline column
    pub vehicle: VehicleDto,

    /// Public-transit sub-mode to compare against (defaults to metro)
    #[serde(default = "default_transit_mode")]
    pub transit_mode: String,
}

/// Vehicle data within an estimate request.
#[derive(Debug, Deserialize)]
pub struct VehicleDto {
    /// Fuel type name (gasoline, diesel, natural-gas, hybrid, electric)
    pub fuel_type: String,

    /// km/l, or km/kWh for electric vehicles
    pub efficiency: f64,

    /// Descriptive vehicle class
    #[serde(default)]
    pub vehicle_class: String,
}

fn default_transit_mode() -> String {
    "metro".to_string()
}

impl From<EstimateTripRequest> for EstimateRequest {
    fn from(req: EstimateTripRequest) -> Self {
        EstimateRequest {
            origin: req.origin,
            destination: req.destination,
            fuel_type: req.vehicle.fuel_type,
            efficiency: req.vehicle.efficiency,
            vehicle_class: req.vehicle.vehicle_class,
            transit_mode: req.transit_mode,
        }
    }
}

/// Query for a direct transit line.
#[derive(Debug, Deserialize)]
pub struct LineQuery {
    pub origin: String,
    pub destination: String,
}

/// A location in the registry listing.
#[derive(Debug, Serialize)]
pub struct LocationResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub zone: String,
}

impl LocationResult {
    /// Create from a domain Location.
    pub fn from_location(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            latitude: location.coordinates.latitude,
            longitude: location.coordinates.longitude,
            zone: location.zone.clone(),
        }
    }
}

/// Response for the location listing.
#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub locations: Vec<LocationResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinates;

    #[test]
    fn estimate_request_deserializes() {
        let json = r#"{
            "origin": "La Carolina",
            "destination": "Quitumbe",
            "vehicle": {"fuel_type": "gasoline", "efficiency": 12.0, "vehicle_class": "sedan"},
            "transit_mode": "trolley"
        }"#;

        let req: EstimateTripRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.origin, "La Carolina");
        assert_eq!(req.transit_mode, "trolley");
        assert_eq!(req.vehicle.fuel_type, "gasoline");
        assert_eq!(req.vehicle.efficiency, 12.0);
    }

    #[test]
    fn transit_mode_defaults_to_metro() {
        let json = r#"{
            "origin": "La Carolina",
            "destination": "Quitumbe",
            "vehicle": {"fuel_type": "electric", "efficiency": 5.0}
        }"#;

        let req: EstimateTripRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.transit_mode, "metro");
        assert_eq!(req.vehicle.vehicle_class, "");
    }

    #[test]
    fn into_estimate_request_flattens_vehicle() {
        let req = EstimateTripRequest {
            origin: "A".to_string(),
            destination: "B".to_string(),
            vehicle: VehicleDto {
                fuel_type: "diesel".to_string(),
                efficiency: 15.0,
                vehicle_class: "truck".to_string(),
            },
            transit_mode: "bus".to_string(),
        };

        let engine_req: EstimateRequest = req.into();
        assert_eq!(engine_req.fuel_type, "diesel");
        assert_eq!(engine_req.efficiency, 15.0);
        assert_eq!(engine_req.vehicle_class, "truck");
        assert_eq!(engine_req.transit_mode, "bus");
    }

    #[test]
    fn location_result_from_location() {
        let loc = Location::new("Plaza Foch", Coordinates::new(-0.1934, -78.4845), "Norte");
        let result = LocationResult::from_location(&loc);

        assert_eq!(result.name, "Plaza Foch");
        assert_eq!(result.latitude, -0.1934);
        assert_eq!(result.longitude, -78.4845);
        assert_eq!(result.zone, "Norte");
    }
}

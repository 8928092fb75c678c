//! The trip estimator.

use serde::Serialize;
use tracing::debug;

use crate::domain::{EstimateError, FuelType, TransitMode, TravelMode, VehicleProfile};
use crate::model::{ModelTables, compare_emissions};
use crate::registry::{DistanceSource, LocationRegistry};
use crate::transit::{LineMatch, TransitNetwork};

use super::format::format_duration;

/// A trip estimation request.
///
/// Fields arrive unvalidated; [`Estimator::estimate`] rejects bad fuel
/// types, transit modes and efficiencies before any arithmetic.
#[derive(Debug, Clone)]
pub struct EstimateRequest {
    pub origin: String,
    pub destination: String,
    pub fuel_type: String,
    /// km/l, or km/kWh for electric vehicles.
    pub efficiency: f64,
    pub vehicle_class: String,
    pub transit_mode: String,
}

/// The private-vehicle baseline column of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrivateVehicleReport {
    /// Litres of fuel, or kWh for electric vehicles.
    pub fuel_consumed: f64,
    pub co2_kg: f64,
    pub cost_usd: f64,
    pub duration_minutes: f64,
    pub duration: String,
    pub points: u32,
    pub impact: String,
}

/// The public-transit column of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitReport {
    pub mode: TransitMode,
    pub co2_kg: f64,
    pub co2_saved_kg: f64,
    pub percentage_saved: f64,
    pub fare_usd: f64,
    pub duration_minutes: f64,
    pub duration: String,
    pub points: u32,
    pub impact: String,

    /// Direct line serving the trip, when one exists. Absent when the
    /// endpoints are not stations on a single line; the metrics above
    /// are still valid, they just come without an itinerary.
    pub itinerary: Option<LineMatch>,
}

/// A bicycle or walking column of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveModeReport {
    pub co2_kg: f64,
    pub co2_saved_kg: f64,
    pub percentage_saved: f64,
    pub fare_usd: f64,
    pub duration_minutes: f64,
    pub duration: String,
    pub points: u32,
    pub calories: u32,
    /// Walking only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<u32>,
    pub impact: String,
}

/// Per-mode comparison for one trip.
///
/// A pure value object, recomputed on every request and suitable for
/// direct JSON serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripComparison {
    pub origin: String,
    pub destination: String,
    pub distance_km: f64,
    /// Whether the distance was resolved from the registry or is the
    /// default substituted for an unknown endpoint.
    pub distance_source: DistanceSource,
    pub private_vehicle: PrivateVehicleReport,
    pub public_transport: TransitReport,
    pub bicycle: ActiveModeReport,
    pub walking: ActiveModeReport,
}

/// The trip estimator.
///
/// Holds the immutable location registry, transit network and model
/// tables. Every call to [`Estimator::estimate`] is independent and
/// idempotent, so an estimator can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Estimator {
    registry: LocationRegistry,
    network: TransitNetwork,
    tables: ModelTables,
}

impl Estimator {
    /// Create an estimator over the given registry, network and tables.
    pub fn new(registry: LocationRegistry, network: TransitNetwork, tables: ModelTables) -> Self {
        Self {
            registry,
            network,
            tables,
        }
    }

    /// The location registry this estimator resolves names against.
    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    /// The transit network this estimator matches itineraries against.
    pub fn network(&self) -> &TransitNetwork {
        &self.network
    }

    /// Estimate one trip across all four modes.
    ///
    /// Fails only on invalid input (unknown fuel type, unknown transit
    /// mode, non-positive efficiency). Unknown location names degrade to
    /// the default distance and are flagged in the result, and a missing
    /// transit itinerary just leaves the itinerary field empty.
    pub fn estimate(&self, request: &EstimateRequest) -> Result<TripComparison, EstimateError> {
        let fuel = FuelType::parse(&request.fuel_type)?;
        let transit = TransitMode::parse(&request.transit_mode)?;
        let vehicle = VehicleProfile::new(fuel, request.efficiency, &*request.vehicle_class)?;

        let resolved = self
            .registry
            .resolve_distance(&request.origin, &request.destination);
        let distance_km = resolved.km;

        debug!(
            origin = %request.origin,
            destination = %request.destination,
            distance_km,
            source = ?resolved.source,
            "estimating trip"
        );

        let emissions = compare_emissions(
            distance_km,
            &vehicle,
            transit,
            &self.tables.emissions,
            &self.tables.costs,
        );

        let transit_mode = TravelMode::Transit(transit);
        let itinerary = self
            .network
            .find_direct_line(&request.origin, &request.destination)
            .ok();

        let car_minutes = self
            .tables
            .speeds
            .travel_time_minutes(distance_km, TravelMode::PrivateVehicle);
        let transit_minutes = self.tables.speeds.travel_time_minutes(distance_km, transit_mode);
        let bicycle_minutes = self
            .tables
            .speeds
            .travel_time_minutes(distance_km, TravelMode::Bicycle);
        let walking_minutes = self
            .tables
            .speeds
            .travel_time_minutes(distance_km, TravelMode::Walking);

        let private_vehicle = PrivateVehicleReport {
            fuel_consumed: emissions.private_vehicle.fuel_consumed,
            co2_kg: emissions.private_vehicle.co2_kg,
            cost_usd: emissions.private_vehicle.cost_usd,
            duration_minutes: car_minutes,
            duration: format_duration(car_minutes),
            points: self
                .tables
                .points
                .points_for(TravelMode::PrivateVehicle, distance_km),
            impact: "high negative impact".to_string(),
        };

        let public_transport = TransitReport {
            mode: transit,
            co2_kg: emissions.public_transport.co2_kg,
            co2_saved_kg: emissions.public_transport.co2_saved_kg,
            percentage_saved: emissions.public_transport.percentage_saved,
            fare_usd: self.tables.costs.transit_fare(distance_km),
            duration_minutes: transit_minutes,
            duration: format_duration(transit_minutes),
            points: self.tables.points.points_for(transit_mode, distance_km),
            impact: format!(
                "{}% less pollution",
                emissions.public_transport.percentage_saved.round() as i64
            ),
            itinerary,
        };

        let bicycle = ActiveModeReport {
            co2_kg: emissions.bicycle.co2_kg,
            co2_saved_kg: emissions.bicycle.co2_saved_kg,
            percentage_saved: emissions.bicycle.percentage_saved,
            fare_usd: self.tables.costs.bike_share_fare(distance_km),
            duration_minutes: bicycle_minutes,
            duration: format_duration(bicycle_minutes),
            points: self.tables.points.points_for(TravelMode::Bicycle, distance_km),
            calories: self
                .tables
                .activity
                .calories_for(TravelMode::Bicycle, distance_km)
                .unwrap_or(0),
            steps: None,
            impact: "100% emission-free".to_string(),
        };

        let walking = ActiveModeReport {
            co2_kg: emissions.walking.co2_kg,
            co2_saved_kg: emissions.walking.co2_saved_kg,
            percentage_saved: emissions.walking.percentage_saved,
            fare_usd: 0.0,
            duration_minutes: walking_minutes,
            duration: format_duration(walking_minutes),
            points: self.tables.points.points_for(TravelMode::Walking, distance_km),
            calories: self
                .tables
                .activity
                .calories_for(TravelMode::Walking, distance_km)
                .unwrap_or(0),
            steps: Some(self.tables.activity.steps_for(distance_km)),
            impact: "100% emission-free".to_string(),
        };

        Ok(TripComparison {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            distance_km,
            distance_source: resolved.source,
            private_vehicle,
            public_transport,
            bicycle,
            walking,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DEFAULT_DISTANCE_KM, quito_locations};
    use crate::transit::quito_network;

    fn estimator() -> Estimator {
        Estimator::new(quito_locations(), quito_network(), ModelTables::default())
    }

    fn request(origin: &str, destination: &str) -> EstimateRequest {
        EstimateRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
            fuel_type: "gasoline".to_string(),
            efficiency: 12.0,
            vehicle_class: "sedan".to_string(),
            transit_mode: "metro".to_string(),
        }
    }

    #[test]
    fn estimates_a_known_trip() {
        let result = estimator()
            .estimate(&request("La Carolina", "Centro Histórico"))
            .unwrap();

        assert_eq!(result.origin, "La Carolina");
        assert_eq!(result.destination, "Centro Histórico");
        assert_eq!(result.distance_source, DistanceSource::Resolved);
        assert!((result.distance_km - 6.6).abs() < 0.3);

        // ~6.6 km at 12 km/l of gasoline
        let d = result.distance_km;
        assert!((result.private_vehicle.fuel_consumed - d / 12.0).abs() < 1e-9);
        assert!((result.private_vehicle.co2_kg - d / 12.0 * 2.31).abs() < 1e-9);

        // Served directly by Metro Línea 1
        let itinerary = result.public_transport.itinerary.unwrap();
        assert_eq!(itinerary.line, "Metro Línea 1");
        assert_eq!(itinerary.board, "La Carolina");
        assert_eq!(itinerary.alight, "Centro Histórico");
    }

    #[test]
    fn unknown_location_uses_default_distance() {
        let result = estimator().estimate(&request("Narnia", "Quitumbe")).unwrap();

        assert_eq!(result.distance_source, DistanceSource::Fallback);
        assert_eq!(result.distance_km, DEFAULT_DISTANCE_KM);
        // No line serves an unknown station; metrics are still present
        assert!(result.public_transport.itinerary.is_none());
        assert!(result.public_transport.co2_kg > 0.0);
    }

    #[test]
    fn rejects_zero_efficiency() {
        let mut req = request("La Carolina", "Quitumbe");
        req.efficiency = 0.0;

        let err = estimator().estimate(&req).unwrap_err();
        assert!(matches!(err, EstimateError::Efficiency(_)));
    }

    #[test]
    fn rejects_negative_efficiency() {
        let mut req = request("La Carolina", "Quitumbe");
        req.efficiency = -4.0;
        assert!(estimator().estimate(&req).is_err());
    }

    #[test]
    fn rejects_unknown_fuel_type() {
        let mut req = request("La Carolina", "Quitumbe");
        req.fuel_type = "kerosene".to_string();

        let err = estimator().estimate(&req).unwrap_err();
        assert!(matches!(err, EstimateError::FuelType(_)));
    }

    #[test]
    fn rejects_unknown_transit_mode() {
        let mut req = request("La Carolina", "Quitumbe");
        req.transit_mode = "tram".to_string();

        let err = estimator().estimate(&req).unwrap_err();
        assert!(matches!(err, EstimateError::TransitMode(_)));
    }

    #[test]
    fn electric_vehicle_scenario() {
        // 10 km default distance at 5 km/kWh: 2 kWh, 0.6 kg CO₂
        let mut req = request("Narnia", "Atlantis");
        req.fuel_type = "electric".to_string();
        req.efficiency = 5.0;

        let result = estimator().estimate(&req).unwrap();
        assert_eq!(result.distance_km, 10.0);
        assert!((result.private_vehicle.fuel_consumed - 2.0).abs() < 1e-9);
        assert!((result.private_vehicle.co2_kg - 0.6).abs() < 1e-9);
    }

    #[test]
    fn impact_labels() {
        let result = estimator()
            .estimate(&request("La Carolina", "Quitumbe"))
            .unwrap();

        assert_eq!(result.private_vehicle.impact, "high negative impact");
        assert_eq!(result.bicycle.impact, "100% emission-free");
        assert_eq!(result.walking.impact, "100% emission-free");

        let pct = result.public_transport.percentage_saved.round() as i64;
        assert_eq!(
            result.public_transport.impact,
            format!("{pct}% less pollution")
        );
    }

    #[test]
    fn zero_baseline_transit_impact_is_zero_percent() {
        let mut req = request("La Carolina", "La Carolina");
        req.fuel_type = "electric".to_string();
        req.efficiency = 5.0;

        let result = estimator().estimate(&req).unwrap();
        assert_eq!(result.distance_km, 0.0);
        assert_eq!(result.public_transport.percentage_saved, 0.0);
        assert_eq!(result.public_transport.impact, "0% less pollution");
    }

    #[test]
    fn points_follow_the_schedule() {
        let result = estimator().estimate(&request("Narnia", "Atlantis")).unwrap();

        // 10 km default distance
        assert_eq!(result.private_vehicle.points, 0);
        assert_eq!(result.public_transport.points, 50);
        assert_eq!(result.bicycle.points, 80);
        assert_eq!(result.walking.points, 120);
    }

    #[test]
    fn durations_use_mode_speeds() {
        let result = estimator().estimate(&request("Narnia", "Atlantis")).unwrap();

        // 10 km: car 24 min, metro ~17 min, bicycle 40 min, walk 2h
        assert!((result.private_vehicle.duration_minutes - 24.0).abs() < 1e-9);
        assert_eq!(result.private_vehicle.duration, "24 min");
        assert!((result.public_transport.duration_minutes - 10.0 / 35.0 * 60.0).abs() < 1e-9);
        assert!((result.bicycle.duration_minutes - 40.0).abs() < 1e-9);
        assert!((result.walking.duration_minutes - 120.0).abs() < 1e-9);
        assert_eq!(result.walking.duration, "2h");
    }

    #[test]
    fn active_mode_extras() {
        let result = estimator().estimate(&request("Narnia", "Atlantis")).unwrap();

        // 10 km default distance
        assert_eq!(result.bicycle.calories, 450);
        assert_eq!(result.walking.calories, 650);
        assert_eq!(result.walking.steps, Some(13000));
        assert_eq!(result.bicycle.steps, None);

        // Fares: transit flat 0.35 under 15 km, bike share 0.50 at 10 km
        assert_eq!(result.public_transport.fare_usd, 0.35);
        assert_eq!(result.bicycle.fare_usd, 0.50);
        assert_eq!(result.walking.fare_usd, 0.0);
    }

    #[test]
    fn long_trip_raises_fares() {
        // Aeropuerto → Quitumbe crosses the whole city, well past both
        // fare thresholds.
        let result = estimator()
            .estimate(&request("Aeropuerto", "Quitumbe"))
            .unwrap();

        assert!(result.distance_km > 15.0, "got {}", result.distance_km);
        assert_eq!(result.public_transport.fare_usd, 0.70);
        assert_eq!(result.bicycle.fare_usd, 1.00);
    }

    #[test]
    fn comparison_serializes_to_json() {
        let result = estimator()
            .estimate(&request("La Carolina", "Quitumbe"))
            .unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["distance_source"], "resolved");
        assert_eq!(json["public_transport"]["mode"], "metro");
        assert!(json["public_transport"]["itinerary"]["stations"].is_array());
        // Bicycle has no steps field at all
        assert!(json["bicycle"].get("steps").is_none());
    }
}

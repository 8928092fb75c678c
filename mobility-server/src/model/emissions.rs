//! CO₂ emission factors and the per-mode emission comparison.

use crate::domain::{FuelType, TransitMode, VehicleProfile};

use super::cost::{CostTable, LITRES_PER_US_GALLON};

/// CO₂ emission factors.
///
/// Liquid fuels emit per litre burned; electric vehicles emit nothing
/// directly but carry the grid's indirect generation factor per kWh.
/// Transit sub-modes emit per passenger-kilometre.
#[derive(Debug, Clone)]
pub struct EmissionFactors {
    pub gasoline_kg_per_litre: f64,
    pub diesel_kg_per_litre: f64,
    pub natural_gas_kg_per_litre: f64,
    pub hybrid_kg_per_litre: f64,

    /// Indirect grid emissions for electric vehicles, kg CO₂ per kWh.
    pub grid_kg_per_kwh: f64,

    pub metro_kg_per_km: f64,
    pub trolley_kg_per_km: f64,
    pub busway_kg_per_km: f64,
    pub bus_kg_per_km: f64,
}

impl EmissionFactors {
    /// Direct emissions per litre for a liquid fuel. Electric vehicles
    /// have no per-litre emissions.
    pub fn kg_per_litre(&self, fuel: FuelType) -> f64 {
        match fuel {
            FuelType::Gasoline => self.gasoline_kg_per_litre,
            FuelType::Diesel => self.diesel_kg_per_litre,
            FuelType::NaturalGas => self.natural_gas_kg_per_litre,
            FuelType::Hybrid => self.hybrid_kg_per_litre,
            FuelType::Electric => 0.0,
        }
    }

    /// Per-passenger-km emissions for a transit sub-mode.
    pub fn kg_per_passenger_km(&self, mode: TransitMode) -> f64 {
        match mode {
            TransitMode::Metro => self.metro_kg_per_km,
            TransitMode::Trolley => self.trolley_kg_per_km,
            TransitMode::Busway => self.busway_kg_per_km,
            TransitMode::Bus => self.bus_kg_per_km,
        }
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            gasoline_kg_per_litre: 2.31,
            diesel_kg_per_litre: 2.68,
            natural_gas_kg_per_litre: 2.75,
            hybrid_kg_per_litre: 1.5,

            grid_kg_per_kwh: 0.3,

            metro_kg_per_km: 0.05,
            trolley_kg_per_km: 0.08,
            busway_kg_per_km: 0.08,
            bus_kg_per_km: 0.12,
        }
    }
}

/// The private-vehicle baseline of an emission comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct PrivateVehicleEmissions {
    /// Litres of fuel, or kWh for electric vehicles.
    pub fuel_consumed: f64,

    /// Direct emissions (indirect grid emissions for electric vehicles).
    pub co2_kg: f64,

    /// Fuel or energy cost in USD.
    pub cost_usd: f64,
}

/// An alternative mode's emissions relative to the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeEmissions {
    pub co2_kg: f64,

    /// CO₂ avoided versus the private vehicle. Never negative.
    pub co2_saved_kg: f64,

    /// Share of the baseline avoided, 0–100.
    pub percentage_saved: f64,
}

/// Per-mode emission and cost comparison for one trip.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionComparison {
    pub private_vehicle: PrivateVehicleEmissions,
    pub public_transport: AlternativeEmissions,
    pub bicycle: AlternativeEmissions,
    pub walking: AlternativeEmissions,
}

/// Compare one trip's emissions and fuel cost across modes.
///
/// Referentially transparent: same inputs, same outputs, no side
/// effects. The vehicle efficiency is validated at `VehicleProfile`
/// construction, so the divisions here cannot hit zero.
///
/// Savings are clamped at zero: a trivially short trip in an efficient
/// car can beat a municipal bus per passenger, but the comparison never
/// reports negative savings. Bicycle and walking claim the whole
/// baseline as saved, 100% by definition, even when the baseline is 0.
pub fn compare_emissions(
    distance_km: f64,
    vehicle: &VehicleProfile,
    transit_mode: TransitMode,
    factors: &EmissionFactors,
    costs: &CostTable,
) -> EmissionComparison {
    let private_vehicle = if vehicle.fuel_type().is_electric() {
        let kwh = distance_km / vehicle.efficiency();
        PrivateVehicleEmissions {
            fuel_consumed: kwh,
            co2_kg: kwh * factors.grid_kg_per_kwh,
            cost_usd: kwh * costs.electricity_usd_per_kwh,
        }
    } else {
        let litres = distance_km / vehicle.efficiency();
        PrivateVehicleEmissions {
            fuel_consumed: litres,
            co2_kg: litres * factors.kg_per_litre(vehicle.fuel_type()),
            cost_usd: (litres / LITRES_PER_US_GALLON)
                * costs.fuel_usd_per_gallon(vehicle.fuel_type()),
        }
    };

    let baseline = private_vehicle.co2_kg;

    let transit_co2 = distance_km * factors.kg_per_passenger_km(transit_mode);
    let transit_saved = (baseline - transit_co2).max(0.0);
    let public_transport = AlternativeEmissions {
        co2_kg: transit_co2,
        co2_saved_kg: transit_saved,
        percentage_saved: if baseline > 0.0 {
            (transit_saved / baseline) * 100.0
        } else {
            0.0
        },
    };

    let emission_free = AlternativeEmissions {
        co2_kg: 0.0,
        co2_saved_kg: baseline,
        percentage_saved: 100.0,
    };

    EmissionComparison {
        private_vehicle,
        public_transport,
        bicycle: emission_free.clone(),
        walking: emission_free,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gasoline_sedan() -> VehicleProfile {
        VehicleProfile::new(FuelType::Gasoline, 12.0, "sedan").unwrap()
    }

    fn compare(distance_km: f64, vehicle: &VehicleProfile, mode: TransitMode) -> EmissionComparison {
        compare_emissions(
            distance_km,
            vehicle,
            mode,
            &EmissionFactors::default(),
            &CostTable::default(),
        )
    }

    #[test]
    fn gasoline_trip() {
        // 8.3 km at 12 km/l: 0.692 l, 1.598 kg CO₂
        let result = compare(8.3, &gasoline_sedan(), TransitMode::Metro);

        assert!((result.private_vehicle.fuel_consumed - 0.6917).abs() < 1e-3);
        assert!((result.private_vehicle.co2_kg - 1.5977).abs() < 1e-3);

        // 0.692 l = 0.1828 gal at $2.55
        assert!((result.private_vehicle.cost_usd - 0.466).abs() < 1e-3);
    }

    #[test]
    fn electric_trip() {
        // 10 km at 5 km/kWh: 2 kWh, 0.6 kg CO₂ via the grid factor
        let ev = VehicleProfile::new(FuelType::Electric, 5.0, "ev").unwrap();
        let result = compare(10.0, &ev, TransitMode::Metro);

        assert!((result.private_vehicle.fuel_consumed - 2.0).abs() < 1e-9);
        assert!((result.private_vehicle.co2_kg - 0.6).abs() < 1e-9);
        assert!((result.private_vehicle.cost_usd - 0.24).abs() < 1e-9);
    }

    #[test]
    fn metro_emissions() {
        // 20 km by metro at 0.05 kg/km = 1.0 kg
        let result = compare(20.0, &gasoline_sedan(), TransitMode::Metro);
        assert!((result.public_transport.co2_kg - 1.0).abs() < 1e-9);
    }

    #[test]
    fn transit_sub_modes_differ() {
        let sedan = gasoline_sedan();
        let metro = compare(10.0, &sedan, TransitMode::Metro);
        let trolley = compare(10.0, &sedan, TransitMode::Trolley);
        let busway = compare(10.0, &sedan, TransitMode::Busway);
        let bus = compare(10.0, &sedan, TransitMode::Bus);

        assert!((metro.public_transport.co2_kg - 0.5).abs() < 1e-9);
        assert!((trolley.public_transport.co2_kg - 0.8).abs() < 1e-9);
        assert!((busway.public_transport.co2_kg - 0.8).abs() < 1e-9);
        assert!((bus.public_transport.co2_kg - 1.2).abs() < 1e-9);
    }

    #[test]
    fn zero_distance_zero_emissions() {
        let result = compare(0.0, &gasoline_sedan(), TransitMode::Metro);

        assert_eq!(result.private_vehicle.co2_kg, 0.0);
        assert_eq!(result.public_transport.co2_kg, 0.0);
        // Baseline 0 → percentage saved defined as 0, not NaN
        assert_eq!(result.public_transport.percentage_saved, 0.0);
        // Active modes still claim 100% by definition
        assert_eq!(result.bicycle.percentage_saved, 100.0);
        assert_eq!(result.walking.percentage_saved, 100.0);
    }

    #[test]
    fn transit_savings_clamped_at_zero() {
        // A very efficient hybrid over a short hop emits less than the
        // municipal bus would; savings must clamp to 0, not go negative.
        let hybrid = VehicleProfile::new(FuelType::Hybrid, 20.0, "compact").unwrap();
        let result = compare(1.0, &hybrid, TransitMode::Bus);

        assert!(result.private_vehicle.co2_kg < result.public_transport.co2_kg);
        assert_eq!(result.public_transport.co2_saved_kg, 0.0);
        assert_eq!(result.public_transport.percentage_saved, 0.0);
    }

    #[test]
    fn active_modes_claim_full_baseline() {
        let result = compare(8.3, &gasoline_sedan(), TransitMode::Metro);

        assert_eq!(result.bicycle.co2_kg, 0.0);
        assert_eq!(result.walking.co2_kg, 0.0);
        assert_eq!(result.bicycle.co2_saved_kg, result.private_vehicle.co2_kg);
        assert_eq!(result.walking.co2_saved_kg, result.private_vehicle.co2_kg);
    }

    #[test]
    fn diesel_uses_diesel_factor_and_price() {
        let truck = VehicleProfile::new(FuelType::Diesel, 15.0, "truck").unwrap();
        let result = compare(15.0, &truck, TransitMode::Metro);

        // 1 litre of diesel
        assert!((result.private_vehicle.fuel_consumed - 1.0).abs() < 1e-9);
        assert!((result.private_vehicle.co2_kg - 2.68).abs() < 1e-9);
        assert!((result.private_vehicle.cost_usd - 1.90 / LITRES_PER_US_GALLON).abs() < 1e-9);
    }
}

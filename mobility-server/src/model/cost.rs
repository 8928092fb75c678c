//! Fuel prices and fares.

use crate::domain::FuelType;

/// Litres in a US gallon, for converting consumption to pump prices.
pub const LITRES_PER_US_GALLON: f64 = 3.785;

/// Monetary cost tables: pump prices per US gallon-equivalent,
/// electricity per kWh, and flat fares for the alternative modes.
///
/// Prices are 2024 Ecuador averages in USD. Hybrids run on gasoline and
/// pay the gasoline price.
#[derive(Debug, Clone)]
pub struct CostTable {
    pub gasoline_usd_per_gallon: f64,
    pub diesel_usd_per_gallon: f64,
    pub natural_gas_usd_per_gallon: f64,
    pub electricity_usd_per_kwh: f64,

    /// Flat transit fare, and the raised fare past the distance threshold.
    pub transit_fare_usd: f64,
    pub transit_long_fare_usd: f64,
    pub transit_long_trip_km: f64,

    /// Bike-share fare, and the raised fare past the distance threshold.
    pub bike_share_fare_usd: f64,
    pub bike_share_long_fare_usd: f64,
    pub bike_share_long_trip_km: f64,
}

impl CostTable {
    /// Pump price per US gallon for a liquid-fuel vehicle.
    ///
    /// Electric vehicles are costed per kWh via
    /// [`CostTable::electricity_usd_per_kwh`], not through this lookup.
    pub fn fuel_usd_per_gallon(&self, fuel: FuelType) -> f64 {
        match fuel {
            FuelType::Gasoline | FuelType::Hybrid => self.gasoline_usd_per_gallon,
            FuelType::Diesel => self.diesel_usd_per_gallon,
            FuelType::NaturalGas => self.natural_gas_usd_per_gallon,
            FuelType::Electric => 0.0,
        }
    }

    /// Transit fare for a trip of the given length.
    pub fn transit_fare(&self, distance_km: f64) -> f64 {
        if distance_km > self.transit_long_trip_km {
            self.transit_long_fare_usd
        } else {
            self.transit_fare_usd
        }
    }

    /// Bike-share fare for a trip of the given length.
    pub fn bike_share_fare(&self, distance_km: f64) -> f64 {
        if distance_km > self.bike_share_long_trip_km {
            self.bike_share_long_fare_usd
        } else {
            self.bike_share_fare_usd
        }
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self {
            gasoline_usd_per_gallon: 2.55,
            diesel_usd_per_gallon: 1.90,
            natural_gas_usd_per_gallon: 0.68,
            electricity_usd_per_kwh: 0.12,

            transit_fare_usd: 0.35,
            transit_long_fare_usd: 0.70,
            transit_long_trip_km: 15.0,

            bike_share_fare_usd: 0.50,
            bike_share_long_fare_usd: 1.00,
            bike_share_long_trip_km: 10.0,
        }
    }
}

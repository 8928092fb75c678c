//! Vehicle profile supplied per estimation request.

use serde::{Deserialize, Serialize};

use super::FuelType;

/// Error returned when a vehicle efficiency is not strictly positive.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("vehicle efficiency must be strictly positive, got {value}")]
pub struct InvalidEfficiency {
    value: f64,
}

/// A private vehicle's fuel profile.
///
/// The efficiency is km per litre for liquid fuels and km per kWh for
/// electric vehicles. It is validated at construction time: any value
/// that is not strictly positive (including NaN) is rejected, so code
/// that receives a `VehicleProfile` can divide by the efficiency without
/// checking it again.
///
/// # Examples
///
/// ```
/// use mobility_server::domain::{FuelType, VehicleProfile};
///
/// let sedan = VehicleProfile::new(FuelType::Gasoline, 12.0, "sedan").unwrap();
/// assert_eq!(sedan.efficiency(), 12.0);
///
/// // Zero efficiency would mean dividing by zero downstream
/// assert!(VehicleProfile::new(FuelType::Gasoline, 0.0, "sedan").is_err());
/// assert!(VehicleProfile::new(FuelType::Diesel, -3.0, "truck").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VehicleProfileDto", into = "VehicleProfileDto")]
pub struct VehicleProfile {
    fuel_type: FuelType,
    efficiency: f64,
    vehicle_class: String,
}

impl VehicleProfile {
    /// Create a validated vehicle profile.
    ///
    /// `efficiency` must be strictly positive and finite.
    pub fn new(
        fuel_type: FuelType,
        efficiency: f64,
        vehicle_class: impl Into<String>,
    ) -> Result<Self, InvalidEfficiency> {
        if !(efficiency > 0.0) || !efficiency.is_finite() {
            return Err(InvalidEfficiency { value: efficiency });
        }

        Ok(Self {
            fuel_type,
            efficiency,
            vehicle_class: vehicle_class.into(),
        })
    }

    /// The vehicle's fuel or energy source.
    pub fn fuel_type(&self) -> FuelType {
        self.fuel_type
    }

    /// Distance per unit of fuel: km/l, or km/kWh for electric vehicles.
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Descriptive vehicle class (e.g. "sedan"). Not used in calculations.
    pub fn vehicle_class(&self) -> &str {
        &self.vehicle_class
    }
}

/// Wire shape for `VehicleProfile`, so deserialization runs validation.
#[derive(Serialize, Deserialize)]
struct VehicleProfileDto {
    fuel_type: FuelType,
    efficiency: f64,
    #[serde(default)]
    vehicle_class: String,
}

impl TryFrom<VehicleProfileDto> for VehicleProfile {
    type Error = InvalidEfficiency;

    fn try_from(dto: VehicleProfileDto) -> Result<Self, Self::Error> {
        VehicleProfile::new(dto.fuel_type, dto.efficiency, dto.vehicle_class)
    }
}

impl From<VehicleProfile> for VehicleProfileDto {
    fn from(profile: VehicleProfile) -> Self {
        VehicleProfileDto {
            fuel_type: profile.fuel_type,
            efficiency: profile.efficiency,
            vehicle_class: profile.vehicle_class,
        }
    }
}

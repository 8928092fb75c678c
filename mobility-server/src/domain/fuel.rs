//! Fuel type for private vehicles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unrecognised fuel type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised fuel type: {input}")]
pub struct InvalidFuelType {
    input: String,
}

/// The fuel (or energy source) of a private vehicle.
///
/// The fuel type selects the emission factor and price used by the
/// emission and cost model. Electric vehicles are special-cased: they
/// have no direct emissions, only the indirect grid factor, and their
/// efficiency is interpreted as km per kWh instead of km per litre.
///
/// # Examples
///
/// ```
/// use mobility_server::domain::FuelType;
///
/// let fuel = FuelType::parse("gasoline").unwrap();
/// assert_eq!(fuel, FuelType::Gasoline);
///
/// // Unknown fuels are rejected, not defaulted
/// assert!(FuelType::parse("kerosene").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FuelType {
    Gasoline,
    Diesel,
    NaturalGas,
    Hybrid,
    Electric,
}

impl FuelType {
    /// Parse a fuel type from its canonical name.
    ///
    /// Accepted names are `gasoline`, `diesel`, `natural-gas`, `hybrid`
    /// and `electric`, case-insensitively. Anything else is an error:
    /// an unrecognised fuel must be rejected before any calculation.
    pub fn parse(s: &str) -> Result<Self, InvalidFuelType> {
        match s.to_ascii_lowercase().as_str() {
            "gasoline" => Ok(FuelType::Gasoline),
            "diesel" => Ok(FuelType::Diesel),
            "natural-gas" => Ok(FuelType::NaturalGas),
            "hybrid" => Ok(FuelType::Hybrid),
            "electric" => Ok(FuelType::Electric),
            _ => Err(InvalidFuelType {
                input: s.to_string(),
            }),
        }
    }

    /// Canonical lowercase name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "gasoline",
            FuelType::Diesel => "diesel",
            FuelType::NaturalGas => "natural-gas",
            FuelType::Hybrid => "hybrid",
            FuelType::Electric => "electric",
        }
    }

    /// Whether this vehicle consumes electricity rather than liquid fuel.
    pub fn is_electric(&self) -> bool {
        matches!(self, FuelType::Electric)
    }
}

impl FromStr for FuelType {
    type Err = InvalidFuelType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FuelType::parse(s)
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Travel and transit mode types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unrecognised transit mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised transit mode: {input}")]
pub struct InvalidTransitMode {
    input: String,
}

/// A specific public-transit service.
///
/// Distinguished from the generic "public transport" comparison axis:
/// the sub-mode selects the per-passenger-km emission factor and the
/// average operating speed used for the transit column of an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransitMode {
    /// Metro Línea 1.
    Metro,
    /// Trolebús.
    Trolley,
    /// Ecovía bus rapid transit corridor.
    Busway,
    /// Municipal buses.
    Bus,
}

impl TransitMode {
    /// Parse a transit mode from its canonical name.
    pub fn parse(s: &str) -> Result<Self, InvalidTransitMode> {
        match s.to_ascii_lowercase().as_str() {
            "metro" => Ok(TransitMode::Metro),
            "trolley" => Ok(TransitMode::Trolley),
            "busway" => Ok(TransitMode::Busway),
            "bus" => Ok(TransitMode::Bus),
            _ => Err(InvalidTransitMode {
                input: s.to_string(),
            }),
        }
    }

    /// Canonical lowercase name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitMode::Metro => "metro",
            TransitMode::Trolley => "trolley",
            TransitMode::Busway => "busway",
            TransitMode::Bus => "bus",
        }
    }
}

impl FromStr for TransitMode {
    type Err = InvalidTransitMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransitMode::parse(s)
    }
}

impl fmt::Display for TransitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A travel mode compared by the trip estimator.
///
/// Every estimate reports one column per variant: the private-vehicle
/// baseline, the selected public-transit sub-mode, bicycle and walking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelMode {
    PrivateVehicle,
    Transit(TransitMode),
    Bicycle,
    Walking,
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TravelMode::PrivateVehicle => f.write_str("private-vehicle"),
            TravelMode::Transit(sub) => write!(f, "transit/{sub}"),
            TravelMode::Bicycle => f.write_str("bicycle"),
            TravelMode::Walking => f.write_str("walking"),
        }
    }
}

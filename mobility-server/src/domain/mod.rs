//! Domain types for the trip estimation engine.
//!
//! This module contains the core domain model types that represent
//! validated estimation inputs. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod error;
mod fuel;
mod location;
mod mode;
mod vehicle;

pub use error::EstimateError;
pub use fuel::{FuelType, InvalidFuelType};
pub use location::{Coordinates, Location};
pub use mode::{InvalidTransitMode, TransitMode, TravelMode};
pub use vehicle::{InvalidEfficiency, VehicleProfile};

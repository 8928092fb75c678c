//! Web layer for the trip estimator.
//!
//! Provides JSON endpoints for estimating trips, listing locations and
//! looking up transit lines. The comparison result is a pure value
//! object, so it is served as-is.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;

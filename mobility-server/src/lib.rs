//! Multi-modal trip estimation engine.
//!
//! A web service that answers: "for this trip across the city, how do
//! a private vehicle, public transit, cycling and walking compare on
//! CO₂, cost, time and reward points?"

pub mod domain;
pub mod estimator;
pub mod geo;
pub mod model;
pub mod registry;
pub mod transit;
pub mod web;

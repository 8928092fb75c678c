//! Application state for the web layer.

use std::sync::Arc;

use crate::estimator::Estimator;

/// Shared application state.
///
/// The estimator owns all the immutable lookup data (registry, network,
/// tables), so it is the only service handlers need.
#[derive(Clone)]
pub struct AppState {
    pub estimator: Arc<Estimator>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(estimator: Estimator) -> Self {
        Self {
            estimator: Arc::new(estimator),
        }
    }
}

//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::domain::EstimateError;
use crate::estimator::TripComparison;
use crate::transit::{LineMatch, NoRouteFound};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/locations", get(list_locations))
        .route("/api/trip/estimate", post(estimate_trip))
        .route("/api/transit/line", get(find_line))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List the registered locations.
async fn list_locations(State(state): State<AppState>) -> Json<LocationsResponse> {
    let locations = state
        .estimator
        .registry()
        .all()
        .iter()
        .map(LocationResult::from_location)
        .collect();

    Json(LocationsResponse { locations })
}

/// Estimate a trip across all modes.
///
/// Unknown location names are not an error: the estimator substitutes
/// its default distance and flags that in the response.
async fn estimate_trip(
    State(state): State<AppState>,
    Json(req): Json<EstimateTripRequest>,
) -> Result<Json<TripComparison>, AppError> {
    let comparison = state.estimator.estimate(&req.into())?;
    Ok(Json(comparison))
}

/// Find the direct transit line between two stations.
async fn find_line(
    State(state): State<AppState>,
    Query(req): Query<LineQuery>,
) -> Result<Json<LineMatch>, AppError> {
    let matched = state
        .estimator
        .network()
        .find_direct_line(&req.origin, &req.destination)?;
    Ok(Json(matched))
}

/// Application-level errors for HTTP responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<EstimateError> for AppError {
    fn from(e: EstimateError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<NoRouteFound> for AppError {
    fn from(e: NoRouteFound) -> Self {
        AppError::NotFound {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        tracing::warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

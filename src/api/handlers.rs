//! REST API handlers for state lookups

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{NearestState, StateDirectory, StateRecord};

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct StateResponse {
    pub code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&StateRecord> for StateResponse {
    fn from(r: &StateRecord) -> Self {
        Self {
            code: r.code.to_string(),
            name: r.name.to_string(),
            latitude: r.centroid.latitude,
            longitude: r.centroid.longitude,
        }
    }
}

#[derive(Serialize)]
pub struct CodeResponse {
    pub code: String,
}

#[derive(Serialize)]
pub struct NearestResponse {
    pub code: String,
    pub name: String,
    pub distance_km: f64,
}

impl From<NearestState> for NearestResponse {
    fn from(n: NearestState) -> Self {
        Self {
            code: n.code.to_string(),
            name: n.name.to_string(),
            distance_km: (n.distance_km * 100.0).round() / 100.0,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn not_found(error: String) -> ApiError {
    (StatusCode::NOT_FOUND, Json(ErrorResponse { error }))
}

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Deserialize)]
pub struct NameQuery {
    pub name: String,
}

#[derive(Deserialize)]
pub struct CoordsQuery {
    pub lat: f64,
    pub lon: f64,
}

// ============================================================================
// Handlers
// ============================================================================

pub type AppState = Arc<StateDirectory>;

/// GET /api/v1/health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// GET /api/v1/states
pub async fn list_states(State(directory): State<AppState>) -> Json<Vec<StateResponse>> {
    Json(directory.records().map(StateResponse::from).collect())
}

/// GET /api/v1/states/:code
pub async fn get_state(
    State(directory): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StateResponse>, ApiError> {
    directory
        .get(&code)
        .map(|r| Json(StateResponse::from(r)))
        .ok_or_else(|| not_found(format!("Unknown state code: {}", code)))
}

/// GET /api/v1/lookup/name?name=X
pub async fn lookup_name(
    State(directory): State<AppState>,
    Query(params): Query<NameQuery>,
) -> Result<Json<CodeResponse>, ApiError> {
    directory
        .by_name(&params.name)
        .map(|code| Json(CodeResponse { code: code.to_string() }))
        .ok_or_else(|| not_found(format!("No state named: {}", params.name)))
}

/// GET /api/v1/lookup/coords?lat=X&lon=Y
pub async fn lookup_coords(
    State(directory): State<AppState>,
    Query(params): Query<CoordsQuery>,
) -> Result<Json<NearestResponse>, ApiError> {
    directory
        .nearest(params.lat, params.lon)
        .map(|n| Json(NearestResponse::from(n)))
        .ok_or_else(|| {
            not_found(format!(
                "No state within tolerance of ({}, {})",
                params.lat, params.lon
            ))
        })
}

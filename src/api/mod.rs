//! REST API for state lookups
//!
//! Read-only JSON endpoints over a shared [`StateDirectory`].

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::StateDirectory;

pub mod handlers;

pub use handlers::AppState;

/// Build the REST router over `directory`
pub fn create_router(directory: Arc<StateDirectory>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/v1/health", get(handlers::health))
        // States
        .route("/api/v1/states", get(handlers::list_states))
        .route("/api/v1/states/:code", get(handlers::get_state))
        // Lookups
        .route("/api/v1/lookup/name", get(handlers::lookup_name))
        .route("/api/v1/lookup/coords", get(handlers::lookup_coords))
        .with_state(directory)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

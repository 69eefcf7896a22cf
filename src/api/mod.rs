//! API handlers for the trip planner REST endpoints

pub mod health;
pub mod lookups;
pub mod openapi;
pub mod project_data;
pub mod trips;

use std::path::Path;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::AppState;

/// Success envelope of the proxy endpoints: `{ "success": true, ...payload }`
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(payload: T) -> Json<Self> {
        Json(Self {
            success: true,
            payload,
        })
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Provider proxies
        .route("/geo", get(lookups::place_by_city))
        .route("/weather", get(lookups::forecast_by_coordinates))
        .route("/image", get(lookups::image_by_city))
        // Trip planning
        .route("/trips", post(trips::plan_trip))
        .route("/trips/view", post(trips::plan_trip_view))
        // Project data
        .route("/add", post(project_data::store_aggregate))
        .route("/all", get(project_data::fetch_last_aggregate))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    let mut app = Router::new().nest("/api/v1", api_v1).merge(openapi);

    // Built client bundle, with index.html for client-side routes
    if let Some(dir) = &state.config.server.static_dir {
        let index = Path::new(dir).join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.layer(TraceLayer::new_for_http()).layer(cors)
}

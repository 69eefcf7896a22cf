//! Health check endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
    /// Provider credentials that are not configured
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_credentials: Vec<String>,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        missing_credentials: Vec::new(),
    })
}

/// Readiness check endpoint (reports missing provider credentials)
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready or degraded", body = HealthResponse)
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let missing: Vec<String> = state
        .config
        .providers
        .missing_credentials()
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(HealthResponse {
        status: if missing.is_empty() { "ready" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        missing_credentials: missing,
    })
}

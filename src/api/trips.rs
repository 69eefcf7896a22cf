//! Trip planning endpoints

use axum::{extract::State, response::Html, Json};

use crate::{
    error::{AppResult, ErrorResponse},
    models::{TripRecord, TripRequest},
    view, AppState,
};

/// Plan a trip: resolve the city, forecast and image and compute the dates
#[utoipa::path(
    post,
    path = "/trips",
    tag = "trips",
    request_body = TripRequest,
    responses(
        (status = 200, description = "Complete trip record", body = TripRecord),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 404, description = "City or forecast not found", body = ErrorResponse),
        (status = 502, description = "Provider failure", body = ErrorResponse)
    )
)]
pub async fn plan_trip(
    State(state): State<AppState>,
    Json(request): Json<TripRequest>,
) -> AppResult<Json<TripRecord>> {
    let record = state.services.trips.plan(&request).await?;
    Ok(Json(record))
}

/// Plan a trip and render the results panel as HTML
#[utoipa::path(
    post,
    path = "/trips/view",
    tag = "trips",
    request_body = TripRequest,
    responses(
        (status = 200, description = "Rendered results panel", content_type = "text/html", body = String),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 404, description = "City or forecast not found", body = ErrorResponse),
        (status = 502, description = "Provider failure", body = ErrorResponse)
    )
)]
pub async fn plan_trip_view(
    State(state): State<AppState>,
    Json(request): Json<TripRequest>,
) -> AppResult<Html<String>> {
    let record = state.services.trips.plan(&request).await?;
    Ok(Html(view::render_html(&record)))
}

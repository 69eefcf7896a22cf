//! Provider proxy endpoints
//!
//! Each endpoint forwards one normalised lookup so clients never hold the
//! provider credentials.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;

use crate::{
    dates::parse_calendar_date,
    error::{AppError, AppResult, ErrorResponse},
    models::{
        forecast::ForecastQuery, place::CityQuery, ForecastResult, ImageResult, PlaceResult,
    },
    AppState,
};

use super::Envelope;

/// Resolve a city to a place
#[utoipa::path(
    get,
    path = "/geo",
    tag = "lookups",
    params(CityQuery),
    responses(
        (status = 200, description = "Place found, wrapped as { success: true, ... }", body = PlaceResult),
        (status = 400, description = "Missing city", body = ErrorResponse),
        (status = 404, description = "City not found", body = ErrorResponse),
        (status = 502, description = "Place provider failure", body = ErrorResponse)
    )
)]
pub async fn place_by_city(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> AppResult<Json<Envelope<PlaceResult>>> {
    let city = required(query.city, "City parameter is required")?;

    let place = state.services.providers.places.lookup_place(&city).await?;
    Ok(Envelope::ok(place))
}

/// Forecast for coordinates on a given day
#[utoipa::path(
    get,
    path = "/weather",
    tag = "lookups",
    params(ForecastQuery),
    responses(
        (status = 200, description = "Forecast found, wrapped as { success: true, ... }", body = ForecastResult),
        (status = 400, description = "Missing or invalid coordinates or date", body = ErrorResponse),
        (status = 404, description = "No forecast available", body = ErrorResponse),
        (status = 502, description = "Forecast provider failure", body = ErrorResponse)
    )
)]
pub async fn forecast_by_coordinates(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<Envelope<ForecastResult>>> {
    const MISSING: &str = "Latitude and longitude parameters are required";
    let latitude = coordinate(required(query.lat, MISSING)?, "latitude", 90.0)?;
    let longitude = coordinate(required(query.lon, MISSING)?, "longitude", 180.0)?;

    let target = match query.date.filter(|d| !d.trim().is_empty()) {
        Some(date) => parse_calendar_date(&date)?,
        None => Local::now().date_naive(),
    };

    let forecast = state
        .services
        .providers
        .forecasts
        .lookup_forecast(latitude, longitude, target)
        .await?;
    Ok(Envelope::ok(forecast))
}

/// Representative image for a city; an empty url means none was found
#[utoipa::path(
    get,
    path = "/image",
    tag = "lookups",
    params(CityQuery),
    responses(
        (status = 200, description = "Image lookup done, wrapped as { success: true, url }", body = ImageResult),
        (status = 400, description = "Missing city", body = ErrorResponse)
    )
)]
pub async fn image_by_city(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> AppResult<Json<Envelope<ImageResult>>> {
    let city = required(query.city, "City parameter is required")?;

    let image = state.services.providers.images.lookup_image(&city).await;
    Ok(Envelope::ok(image))
}

fn required(value: Option<String>, message: &str) -> AppResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(message.to_string()))
}

fn coordinate(raw: String, name: &str, limit: f64) -> AppResult<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.abs() <= limit)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid {}: {}", name, raw)))
}

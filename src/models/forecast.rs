//! Forecast lookup model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A single day's forecast.
///
/// `date` is the day of the entry actually used, which differs from the
/// requested day when the provider had no entry for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastResult {
    pub temperature_celsius: f64,
    pub description: String,
    pub date: NaiveDate,
}

/// Query parameters for the forecast proxy endpoint
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ForecastQuery {
    /// Latitude in decimal degrees
    pub lat: Option<String>,
    /// Longitude in decimal degrees
    pub lon: Option<String>,
    /// Requested day (YYYY-MM-DD), defaults to today
    pub date: Option<String>,
}

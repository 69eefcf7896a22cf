//! Trip request and trip record models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{ForecastResult, ImageResult, PlaceResult};

/// Trip submission as entered in the planning form
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct TripRequest {
    /// Destination city
    #[serde(default)]
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    /// Departure date (YYYY-MM-DD)
    #[serde(default, alias = "departure")]
    #[validate(length(min = 1, message = "Departure date is required"))]
    pub departure_date: String,
    /// Return date (YYYY-MM-DD)
    #[serde(default, alias = "return")]
    #[validate(length(min = 1, message = "Return date is required"))]
    pub return_date: String,
}

impl TripRequest {
    pub fn new(
        city: impl Into<String>,
        departure_date: impl Into<String>,
        return_date: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            departure_date: departure_date.into(),
            return_date: return_date.into(),
        }
    }

    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self::new(
            self.city.trim(),
            self.departure_date.trim(),
            self.return_date.trim(),
        )
    }
}

/// Fully populated result of one successful planning run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TripRecord {
    pub place: PlaceResult,
    pub forecast: ForecastResult,
    pub image: ImageResult,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    /// Days from today until departure, negative for past dates
    pub days_until_departure: i64,
    /// Trip length in days, negative when return precedes departure
    pub duration_days: i64,
}

//! Place lookup model

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A city resolved by the place provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlaceResult {
    /// Display name of the place
    pub name: String,
    /// Country name
    pub country: String,
    /// Latitude in signed decimal degrees
    pub latitude: f64,
    /// Longitude in signed decimal degrees
    pub longitude: f64,
}

impl PlaceResult {
    /// Whether both coordinates are within their valid ranges
    pub fn has_valid_coordinates(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Query parameters for the place and image proxy endpoints
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CityQuery {
    /// Free-text city name
    pub city: Option<String>,
}

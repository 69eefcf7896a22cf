//! GeoNames place lookup

use async_trait::async_trait;
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use crate::{
    config::GeonamesConfig,
    error::{AppError, AppResult, Resource},
    models::PlaceResult,
};

use super::{endpoint, fetch_json, PlaceProvider};

const PROVIDER: &str = "GeoNames";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    geonames: Vec<GeonamesPlace>,
    /// Present instead of results when the account or query is rejected
    status: Option<GeonamesStatus>,
}

#[derive(Debug, Deserialize)]
struct GeonamesStatus {
    #[serde(default)]
    message: String,
    #[serde(default)]
    value: i64,
}

/// Coordinates arrive as strings from searchJSON but as numbers elsewhere
#[serde_as]
#[derive(Debug, Deserialize)]
struct GeonamesPlace {
    #[serde(default)]
    name: String,
    #[serde(rename = "countryName", default)]
    country_name: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    lat: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    lng: f64,
}

#[derive(Clone)]
pub struct GeonamesClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
}

impl GeonamesClient {
    pub fn new(http: reqwest::Client, config: &GeonamesConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            username: config.username.clone().unwrap_or_default(),
        }
    }
}

#[async_trait]
impl PlaceProvider for GeonamesClient {
    async fn lookup_place(&self, city: &str) -> AppResult<PlaceResult> {
        tracing::debug!("GeoNames lookup for city: {}", city);

        let request = self.http.get(endpoint(&self.base_url, "searchJSON")).query(&[
            ("q", city),
            ("maxRows", "1"),
            ("username", self.username.as_str()),
        ]);
        let response: SearchResponse = fetch_json(PROVIDER, request).await?;

        if let Some(status) = response.status {
            return Err(AppError::Upstream(format!(
                "GeoNames rejected the request ({}): {}",
                status.value, status.message
            )));
        }

        let first = response
            .geonames
            .into_iter()
            .next()
            .ok_or(AppError::NotFound(Resource::City))?;

        let place = PlaceResult {
            name: first.name,
            country: first.country_name,
            latitude: first.lat,
            longitude: first.lng,
        };

        if !place.has_valid_coordinates() {
            return Err(AppError::Upstream(format!(
                "GeoNames returned invalid coordinates for {}: ({}, {})",
                city, place.latitude, place.longitude
            )));
        }

        tracing::debug!(
            "GeoNames resolved {} to {}, {} ({}, {})",
            city,
            place.name,
            place.country,
            place.latitude,
            place.longitude
        );
        Ok(place)
    }
}

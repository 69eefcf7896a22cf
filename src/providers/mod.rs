//! Provider adapters for the three external data sources
//!
//! Every adapter performs exactly one request/response cycle (the image
//! adapter may add one fallback query) and normalises the provider's JSON into
//! the canonical models. Place and forecast adapters fail with
//! `AppError::NotFound` or `AppError::Upstream`; the image adapter never fails
//! and reports absence as an empty URL.

pub mod geonames;
pub mod pixabay;
pub mod proxy;
pub mod weatherbit;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::{
    config::ProvidersConfig,
    error::{AppError, AppResult},
    models::{ForecastResult, ImageResult, PlaceResult},
};

/// Resolves a free-text city name to a place
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceProvider: Send + Sync {
    async fn lookup_place(&self, city: &str) -> AppResult<PlaceResult>;
}

/// Resolves coordinates and a target day to a forecast entry
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn lookup_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        target: NaiveDate,
    ) -> AppResult<ForecastResult>;
}

/// Resolves a free-text query to a representative image
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageProvider: Send + Sync {
    async fn lookup_image(&self, query: &str) -> ImageResult;
}

/// Container for one adapter per data source
#[derive(Clone)]
pub struct Providers {
    pub places: Arc<dyn PlaceProvider>,
    pub forecasts: Arc<dyn ForecastProvider>,
    pub images: Arc<dyn ImageProvider>,
}

impl Providers {
    /// Adapters talking to the third-party APIs directly
    pub fn direct(config: &ProvidersConfig) -> AppResult<Self> {
        let http = build_http_client(config.timeout_seconds)?;

        Ok(Self {
            places: Arc::new(geonames::GeonamesClient::new(http.clone(), &config.geonames)),
            forecasts: Arc::new(weatherbit::WeatherbitClient::new(
                http.clone(),
                &config.weatherbit,
            )),
            images: Arc::new(pixabay::PixabayClient::new(http, &config.pixabay)),
        })
    }

    /// Adapters going through a running trip planner proxy server
    pub fn via_proxy(base_url: &str, timeout_seconds: u64) -> AppResult<Self> {
        let client = Arc::new(proxy::ProxyClient::new(
            build_http_client(timeout_seconds)?,
            base_url,
        ));

        Ok(Self {
            places: client.clone(),
            forecasts: client.clone(),
            images: client,
        })
    }
}

/// Shared outbound HTTP client
pub fn build_http_client(timeout_seconds: u64) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(concat!("trip-planner/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))
}

/// Join a base URL and a path without doubling slashes
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Send a request and decode a successful JSON body.
///
/// Non-success statuses, network errors and undecodable bodies all become
/// `AppError::Upstream`. Error messages never include the request URL since it
/// carries credentials.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    provider: &str,
    request: reqwest::RequestBuilder,
) -> AppResult<T> {
    let response = request.send().await.map_err(|e| {
        AppError::Upstream(format!("{} request failed: {}", provider, e.without_url()))
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Upstream(format!(
            "{} API error: {}",
            provider, status
        )));
    }

    response.json::<T>().await.map_err(|e| {
        AppError::Upstream(format!(
            "{} returned a malformed body: {}",
            provider,
            e.without_url()
        ))
    })
}

//! Adapters backed by the trip planner's own proxy endpoints
//!
//! Used by clients that must not hold provider credentials. Envelopes with
//! `success: false` and a 404 status map back to `AppError::NotFound`.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::{AppError, AppResult, Resource},
    models::{ForecastResult, ImageResult, PlaceResult},
};

use super::{endpoint, ForecastProvider, ImageProvider, PlaceProvider};

#[derive(Clone)]
pub struct ProxyClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProxyClient {
    /// `base_url` points at the API root, e.g. `http://localhost:3000/api/v1`
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        resource: Option<Resource>,
    ) -> AppResult<T> {
        let response = self
            .http
            .get(endpoint(&self.base_url, path))
            .query(query)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Proxy request to /{} failed: {}", path, e)))?;

        let status = response.status();
        let body: Value = response.json().await.map_err(|e| {
            AppError::Upstream(format!("Proxy /{} returned a malformed body: {}", path, e))
        })?;

        if body.get("success").and_then(Value::as_bool) == Some(true) {
            return serde_json::from_value(body).map_err(|e| {
                AppError::Upstream(format!("Proxy /{} returned an unexpected payload: {}", path, e))
            });
        }

        match resource {
            Some(resource) if status == StatusCode::NOT_FOUND => Err(AppError::NotFound(resource)),
            _ => {
                let message = body
                    .get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error");
                Err(AppError::Upstream(format!(
                    "Proxy /{} failed ({}): {}",
                    path, status, message
                )))
            }
        }
    }
}

#[async_trait]
impl PlaceProvider for ProxyClient {
    async fn lookup_place(&self, city: &str) -> AppResult<PlaceResult> {
        self.fetch("geo", &[("city", city.to_string())], Some(Resource::City))
            .await
    }
}

#[async_trait]
impl ForecastProvider for ProxyClient {
    async fn lookup_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        target: NaiveDate,
    ) -> AppResult<ForecastResult> {
        let query = [
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
            ("date", target.format("%Y-%m-%d").to_string()),
        ];
        self.fetch("weather", &query, Some(Resource::Weather)).await
    }
}

#[async_trait]
impl ImageProvider for ProxyClient {
    async fn lookup_image(&self, query: &str) -> ImageResult {
        match self
            .fetch::<ImageResult>("image", &[("city", query.to_string())], None)
            .await
        {
            Ok(image) => image,
            Err(e) => {
                tracing::warn!("Image lookup via proxy failed, continuing without image: {}", e);
                ImageResult::none()
            }
        }
    }
}

//! Pixabay image lookup

use async_trait::async_trait;
use serde::Deserialize;

use crate::{config::PixabayConfig, error::AppResult, models::ImageResult};

use super::{endpoint, fetch_json, ImageProvider};

const PROVIDER: &str = "Pixabay";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "webformatURL", default)]
    webformat_url: String,
}

#[derive(Clone)]
pub struct PixabayClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    image_type: String,
    fallback_query: Option<String>,
}

impl PixabayClient {
    pub fn new(http: reqwest::Client, config: &PixabayConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone().unwrap_or_default(),
            image_type: config.image_type.clone(),
            fallback_query: config
                .fallback_query
                .clone()
                .filter(|q| !q.trim().is_empty()),
        }
    }

    /// First usable image URL for `query`, `None` when there are no hits
    async fn search(&self, query: &str) -> AppResult<Option<String>> {
        let request = self.http.get(endpoint(&self.base_url, "")).query(&[
            ("key", self.api_key.as_str()),
            ("q", query),
            ("image_type", self.image_type.as_str()),
        ]);
        let response: SearchResponse = fetch_json(PROVIDER, request).await?;

        Ok(response
            .hits
            .into_iter()
            .map(|hit| hit.webformat_url)
            .find(|url| !url.is_empty()))
    }
}

#[async_trait]
impl ImageProvider for PixabayClient {
    async fn lookup_image(&self, query: &str) -> ImageResult {
        tracing::debug!("Pixabay lookup for: {}", query);

        let mut queries = vec![query];
        if let Some(fallback) = self.fallback_query.as_deref() {
            queries.push(fallback);
        }

        for q in queries {
            match self.search(q).await {
                Ok(Some(url)) => return ImageResult { url },
                Ok(None) => tracing::debug!("Pixabay has no image for: {}", q),
                Err(e) => {
                    tracing::warn!("Image lookup failed, continuing without image: {}", e);
                    return ImageResult::none();
                }
            }
        }

        ImageResult::none()
    }
}

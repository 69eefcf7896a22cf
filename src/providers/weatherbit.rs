//! Weatherbit daily forecast lookup

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    config::WeatherbitConfig,
    dates::parse_calendar_date,
    error::{AppError, AppResult, Resource},
    models::ForecastResult,
};

use super::{endpoint, fetch_json, ForecastProvider};

const PROVIDER: &str = "Weatherbit";

#[derive(Debug, Deserialize)]
struct DailyForecastResponse {
    #[serde(default)]
    data: Vec<DailyEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct DailyEntry {
    datetime: String,
    temp: f64,
    weather: Condition,
}

#[derive(Debug, Clone, Deserialize)]
struct Condition {
    #[serde(default)]
    description: String,
}

#[derive(Clone)]
pub struct WeatherbitClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherbitClient {
    pub fn new(http: reqwest::Client, config: &WeatherbitConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone().unwrap_or_default(),
        }
    }
}

#[async_trait]
impl ForecastProvider for WeatherbitClient {
    async fn lookup_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        target: NaiveDate,
    ) -> AppResult<ForecastResult> {
        tracing::debug!(
            "Weatherbit lookup for ({}, {}) on {}",
            latitude,
            longitude,
            target
        );

        let request = self
            .http
            .get(endpoint(&self.base_url, "forecast/daily"))
            .query(&[("lat", latitude), ("lon", longitude)])
            .query(&[("key", self.api_key.as_str())]);
        let response: DailyForecastResponse = fetch_json(PROVIDER, request).await?;

        select_forecast(&response.data, target)
    }
}

/// Pick the entry for `target`, or the first entry when none matches.
fn select_forecast(entries: &[DailyEntry], target: NaiveDate) -> AppResult<ForecastResult> {
    let first = entries.first().ok_or(AppError::NotFound(Resource::Weather))?;

    let exact = entries.iter().find_map(|entry| {
        parse_calendar_date(&entry.datetime)
            .ok()
            .filter(|date| *date == target)
            .map(|date| (entry, date))
    });

    let (entry, date) = match exact {
        Some(found) => found,
        None => {
            let date = parse_calendar_date(&first.datetime).map_err(|_| {
                AppError::Upstream(format!(
                    "Weatherbit returned an unreadable forecast date: {}",
                    first.datetime
                ))
            })?;
            tracing::debug!(
                "No forecast for {}, falling back to first entry ({})",
                target,
                date
            );
            (first, date)
        }
    };

    Ok(ForecastResult {
        temperature_celsius: entry.temp,
        description: entry.weather.description.clone(),
        date,
    })
}

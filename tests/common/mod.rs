//! Shared helpers for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use trip_planner::{
    config::{AppConfig, GeonamesConfig, PixabayConfig, ProvidersConfig, WeatherbitConfig},
    providers::Providers,
    services::Services,
    AppState,
};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

pub const GEONAMES_PATH: &str = "/geonames/searchJSON";
pub const WEATHERBIT_PATH: &str = "/weatherbit/forecast/daily";
pub const PIXABAY_PATH: &str = "/pixabay/";

/// Provider configuration pointing every adapter at the mock server
pub fn providers_config(mock_server: &MockServer) -> ProvidersConfig {
    let base = mock_server.uri();
    ProvidersConfig {
        timeout_seconds: 5,
        geonames: GeonamesConfig {
            base_url: format!("{}/geonames", base),
            username: Some("demo".to_string()),
        },
        weatherbit: WeatherbitConfig {
            base_url: format!("{}/weatherbit", base),
            api_key: Some("wb-secret".to_string()),
        },
        pixabay: PixabayConfig {
            base_url: format!("{}/pixabay", base),
            api_key: Some("px-secret".to_string()),
            image_type: "photo".to_string(),
            fallback_query: None,
        },
    }
}

pub fn app_state(providers_config: ProvidersConfig) -> AppState {
    let providers = Providers::direct(&providers_config).unwrap();
    let config = AppConfig {
        providers: providers_config,
        ..AppConfig::default()
    };

    AppState {
        config: Arc::new(config),
        services: Arc::new(Services::new(providers)),
    }
}

pub fn paris_body() -> Value {
    json!({
        "totalResultsCount": 1,
        "geonames": [{
            "name": "Paris",
            "countryName": "France",
            "lat": "48.85341",
            "lng": "2.3488",
            "geonameId": 2988507
        }]
    })
}

pub fn forecast_body() -> Value {
    json!({
        "city_name": "Paris",
        "data": [
            { "datetime": "2023-07-01", "temp": 25.0, "weather": { "description": "Sunny", "code": 800 } },
            { "datetime": "2023-07-02", "temp": 19.5, "weather": { "description": "Light rain", "code": 500 } }
        ]
    })
}

pub fn image_body(url: &str) -> Value {
    json!({ "total": 1, "totalHits": 1, "hits": [{ "id": 1, "webformatURL": url }] })
}

pub fn no_hits_body() -> Value {
    json!({ "total": 0, "totalHits": 0, "hits": [] })
}

pub async fn mount_place(mock_server: &MockServer, city: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(GEONAMES_PATH))
        .and(query_param("q", city))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

pub async fn mount_forecast(mock_server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(WEATHERBIT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

pub async fn mount_image(mock_server: &MockServer, query: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(PIXABAY_PATH))
        .and(query_param("q", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

/// Mount all three providers answering successfully for Paris
pub async fn mount_paris(mock_server: &MockServer) {
    mount_place(mock_server, "Paris", paris_body()).await;
    mount_forecast(mock_server, forecast_body()).await;
    mount_image(
        mock_server,
        "Paris",
        image_body("https://cdn.example.com/paris.jpg"),
    )
    .await;
}

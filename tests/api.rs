//! API tests driving the router in-process against mocked providers

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Local, NaiveDate};
use serde_json::{json, Value};
use tower::ServiceExt;
use trip_planner::{
    api, dates,
    error::{AppError, Resource},
    models::TripRequest,
    providers::Providers,
    services::trips::TripPlanner,
};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use common::*;

fn app(mock_server: &MockServer) -> Router {
    api::router(app_state(providers_config(mock_server)))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let (status, body) = post(app, uri, body).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_check() {
    let mock_server = MockServer::start().await;
    let (status, body) = get_json(&app(&mock_server), "/api/v1/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_reports_missing_credentials() {
    let mock_server = MockServer::start().await;
    let mut config = providers_config(&mock_server);
    config.pixabay.api_key = None;
    let app = api::router(app_state(config));

    let (status, body) = get_json(&app, "/api/v1/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["missing_credentials"], json!(["PIXABAY_API_KEY"]));
}

#[tokio::test]
async fn test_geo_returns_success_envelope() {
    let mock_server = MockServer::start().await;
    mount_place(&mock_server, "Paris", paris_body()).await;

    let (status, body) = get_json(&app(&mock_server), "/api/v1/geo?city=Paris").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "name": "Paris",
            "country": "France",
            "latitude": 48.85341,
            "longitude": 2.3488
        })
    );
}

#[tokio::test]
async fn test_geo_requires_city() {
    let mock_server = MockServer::start().await;
    let (status, body) = get_json(&app(&mock_server), "/api/v1/geo?city=%20").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "City parameter is required");
}

#[tokio::test]
async fn test_geo_unknown_city_is_not_found() {
    let mock_server = MockServer::start().await;
    mount_place(&mock_server, "Atlantis", json!({ "geonames": [] })).await;

    let (status, body) = get_json(&app(&mock_server), "/api/v1/geo?city=Atlantis").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "NoSuchCity");
    assert_eq!(body["error"], "City not found");
}

#[tokio::test]
async fn test_weather_for_coordinates_and_date() {
    let mock_server = MockServer::start().await;
    mount_forecast(&mock_server, forecast_body()).await;

    let (status, body) = get_json(
        &app(&mock_server),
        "/api/v1/weather?lat=48.85341&lon=2.3488&date=2023-07-02",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "temperature_celsius": 19.5,
            "description": "Light rain",
            "date": "2023-07-02"
        })
    );
}

#[tokio::test]
async fn test_weather_requires_coordinates() {
    let mock_server = MockServer::start().await;
    let app = app(&mock_server);

    let (status, body) = get_json(&app, "/api/v1/weather?lat=48.85341").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Latitude and longitude parameters are required");

    let (status, body) = get_json(&app, "/api/v1/weather?lat=200&lon=2.3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid latitude: 200");
}

#[tokio::test]
async fn test_weather_upstream_failure_is_bad_gateway() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(WEATHERBIT_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let (status, body) = get_json(
        &app(&mock_server),
        "/api/v1/weather?lat=48.85341&lon=2.3488",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["success"], false);
    assert_eq!(body["kind"], "UpstreamFailure");
}

#[tokio::test]
async fn test_image_without_hits_is_successful_and_empty() {
    let mock_server = MockServer::start().await;
    mount_image(&mock_server, "Tiny Village", no_hits_body()).await;

    let (status, body) = get_json(
        &app(&mock_server),
        "/api/v1/image?city=Tiny%20Village",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "url": "" }));
}

#[tokio::test]
async fn test_plan_trip_returns_complete_record() {
    let mock_server = MockServer::start().await;
    mount_paris(&mock_server).await;

    let (status, body) = post_json(
        &app(&mock_server),
        "/api/v1/trips",
        json!({ "city": "Paris", "departure_date": "2023-07-01", "return_date": "2023-07-10" }),
    )
    .await;

    let departure = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();
    let expected_days = dates::days_until(departure, Local::now().date_naive());

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["place"]["name"], "Paris");
    assert_eq!(body["place"]["country"], "France");
    assert_eq!(body["forecast"]["description"], "Sunny");
    assert_eq!(body["forecast"]["date"], "2023-07-01");
    assert_eq!(body["image"]["url"], "https://cdn.example.com/paris.jpg");
    assert_eq!(body["departure_date"], "2023-07-01");
    assert_eq!(body["return_date"], "2023-07-10");
    assert_eq!(body["duration_days"], 9);
    assert_eq!(body["days_until_departure"], expected_days);
}

#[tokio::test]
async fn test_plan_trip_accepts_form_field_names() {
    let mock_server = MockServer::start().await;
    mount_paris(&mock_server).await;

    let (status, body) = post_json(
        &app(&mock_server),
        "/api/v1/trips",
        json!({ "city": "Paris", "departure": "2023-07-01", "return": "2023-07-03" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["duration_days"], 2);
}

#[tokio::test]
async fn test_plan_trip_stops_when_city_is_unknown() {
    let mock_server = MockServer::start().await;
    mount_place(&mock_server, "Atlantis", json!({ "geonames": [] })).await;
    Mock::given(method("GET"))
        .and(path(WEATHERBIT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(0)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(PIXABAY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(no_hits_body()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (status, body) = post_json(
        &app(&mock_server),
        "/api/v1/trips",
        json!({ "city": "Atlantis", "departure_date": "2023-07-01", "return_date": "2023-07-10" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "City not found");
}

#[tokio::test]
async fn test_plan_trip_validates_before_calling_providers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (status, body) = post_json(
        &app(&mock_server),
        "/api/v1/trips",
        json!({ "city": "Paris", "departure_date": "2023-07-01" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Return date is required");
}

#[tokio::test]
async fn test_plan_trip_view_renders_html() {
    let mock_server = MockServer::start().await;
    mount_paris(&mock_server).await;

    let (status, body) = post(
        &app(&mock_server),
        "/api/v1/trips/view",
        json!({ "city": "Paris", "departure_date": "2023-07-01", "return_date": "2023-07-10" }),
    )
    .await;
    let html = String::from_utf8(body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h2>Trip to Paris, France</h2>"));
    assert!(html.contains("<p>Trip Duration: 9 days</p>"));
    assert!(html.contains("https://cdn.example.com/paris.jpg"));
}

#[tokio::test]
async fn test_project_data_last_write_wins() {
    let mock_server = MockServer::start().await;
    let app = app(&mock_server);

    let (status, body) = get_json(&app, "/api/v1/all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    post_json(&app, "/api/v1/add", json!({ "city": "Paris" })).await;
    let (status, body) = post_json(&app, "/api/v1/add", json!({ "city": "Oslo", "days": 4 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "city": "Oslo", "days": 4 }));

    let (_, body) = get_json(&app, "/api/v1/all").await;
    assert_eq!(body, json!({ "city": "Oslo", "days": 4 }));
}

#[tokio::test]
async fn test_planning_through_running_proxy() {
    let mock_server = MockServer::start().await;
    mount_paris(&mock_server).await;
    mount_place(&mock_server, "Atlantis", json!({ "geonames": [] })).await;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = app(&mock_server);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let providers = Providers::via_proxy(&format!("http://{}/api/v1", addr), 5).unwrap();
    let planner = TripPlanner::new(providers);
    let today = NaiveDate::from_ymd_opt(2023, 6, 26).unwrap();

    let record = planner
        .plan_on(&TripRequest::new("Paris", "2023-07-01", "2023-07-10"), today)
        .await
        .unwrap();
    assert_eq!(record.place.name, "Paris");
    assert_eq!(record.forecast.description, "Sunny");
    assert_eq!(record.image.url, "https://cdn.example.com/paris.jpg");
    assert_eq!(record.days_until_departure, 5);
    assert_eq!(record.duration_days, 9);

    let err = planner
        .plan_on(&TripRequest::new("Atlantis", "2023-07-01", "2023-07-10"), today)
        .await
        .unwrap_err();
    assert_eq!(err, AppError::NotFound(Resource::City));
}

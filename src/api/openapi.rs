//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, lookups, project_data, trips};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trip Planner API",
        version = "0.1.0",
        description = "Travel planning proxy and trip aggregation REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Provider proxies
        lookups::place_by_city,
        lookups::forecast_by_coordinates,
        lookups::image_by_city,
        // Trips
        trips::plan_trip,
        trips::plan_trip_view,
        // Project data
        project_data::store_aggregate,
        project_data::fetch_last_aggregate,
    ),
    components(
        schemas(
            crate::models::PlaceResult,
            crate::models::ForecastResult,
            crate::models::ImageResult,
            crate::models::TripRequest,
            crate::models::TripRecord,
            crate::models::ProjectData,
            crate::models::place::CityQuery,
            crate::models::forecast::ForecastQuery,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "lookups", description = "Place, forecast and image provider proxies"),
        (name = "trips", description = "Trip planning"),
        (name = "project_data", description = "Single-slot project data store")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

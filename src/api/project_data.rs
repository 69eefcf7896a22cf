//! Project data endpoints backed by the single in-memory slot

use axum::{extract::State, Json};

use crate::{models::ProjectData, AppState};

/// Replace the stored aggregate
#[utoipa::path(
    post,
    path = "/add",
    tag = "project_data",
    request_body = ProjectData,
    responses(
        (status = 200, description = "Aggregate stored", body = ProjectData)
    )
)]
pub async fn store_aggregate(
    State(state): State<AppState>,
    Json(data): Json<ProjectData>,
) -> Json<ProjectData> {
    tracing::debug!("Replacing project data");
    Json(state.services.project_data.store(data))
}

/// Return the last stored aggregate, `{}` when empty
#[utoipa::path(
    get,
    path = "/all",
    tag = "project_data",
    responses(
        (status = 200, description = "Last stored aggregate", body = ProjectData)
    )
)]
pub async fn fetch_last_aggregate(State(state): State<AppState>) -> Json<ProjectData> {
    Json(state.services.project_data.latest())
}

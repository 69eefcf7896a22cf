//! Project data model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Arbitrary JSON aggregate kept in the project data slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectData(#[schema(value_type = Object)] pub serde_json::Value);

impl Default for ProjectData {
    fn default() -> Self {
        Self(serde_json::Value::Object(serde_json::Map::new()))
    }
}

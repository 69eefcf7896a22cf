//! Image lookup model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A representative image; an empty `url` means no image was found
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ImageResult {
    pub url: String,
}

impl ImageResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }
}

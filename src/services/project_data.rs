//! Single-slot project data store
//!
//! Holds the most recently submitted aggregate for the whole process. There is
//! no per-client isolation: concurrent `store` calls race and the last write
//! wins.

use std::sync::{Arc, RwLock};

use crate::models::ProjectData;

#[derive(Clone, Default)]
pub struct ProjectDataService {
    slot: Arc<RwLock<ProjectData>>,
}

impl ProjectDataService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored aggregate and return what is now stored
    pub fn store(&self, data: ProjectData) -> ProjectData {
        let mut slot = self.slot.write().unwrap_or_else(|e| e.into_inner());
        *slot = data;
        slot.clone()
    }

    /// Most recently stored aggregate, `{}` when nothing was stored yet
    pub fn latest(&self) -> ProjectData {
        self.slot.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

//! Business logic services

pub mod project_data;
pub mod trips;

use crate::providers::Providers;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    /// Adapters exposed one-to-one by the proxy endpoints
    pub providers: Providers,
    pub trips: trips::TripPlanner,
    pub project_data: project_data::ProjectDataService,
}

impl Services {
    /// Create all services on top of the given provider adapters
    pub fn new(providers: Providers) -> Self {
        Self {
            trips: trips::TripPlanner::new(providers.clone()),
            project_data: project_data::ProjectDataService::new(),
            providers,
        }
    }
}

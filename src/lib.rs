//! Trip Planner
//!
//! Travel planning server: proxies the place, forecast and image providers so
//! credentials stay server-side, and aggregates them with date arithmetic into
//! a single trip record.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod dates;
pub mod error;
pub mod models;
pub mod providers;
pub mod services;
pub mod view;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

//! Data models for the trip planner

pub mod forecast;
pub mod image;
pub mod place;
pub mod project;
pub mod trip;

// Re-export commonly used types
pub use forecast::ForecastResult;
pub use image::ImageResult;
pub use place::PlaceResult;
pub use project::ProjectData;
pub use trip::{TripRecord, TripRequest};

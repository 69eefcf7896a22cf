//! Error types for the trip planner

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Stable numeric error codes carried in every failure body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    BadValue = 2,
    NoSuchCity = 3,
    NoSuchForecast = 4,
    UpstreamFailure = 5,
}

/// Upstream resource that is required to build a trip record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    City,
    Weather,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::City => "city",
            Resource::Weather => "weather",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main application error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(Resource),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status and error code for this error
    pub fn status(&self) -> (StatusCode, ErrorCode) {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue)
            }
            AppError::NotFound(Resource::City) => (StatusCode::NOT_FOUND, ErrorCode::NoSuchCity),
            AppError::NotFound(Resource::Weather) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchForecast)
            }
            AppError::Upstream(_) => (StatusCode::BAD_GATEWAY, ErrorCode::UpstreamFailure),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::Failure),
        }
    }

    /// Message shown to the end user
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::BadRequest(msg) => msg.clone(),
            AppError::NotFound(Resource::City) => "City not found".to_string(),
            AppError::NotFound(Resource::Weather) => "Weather data not found".to_string(),
            AppError::Upstream(msg) => msg.clone(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        messages.sort();
        AppError::Validation(messages.join("; "))
    }
}

/// Error response body, shared by every endpoint including the proxy lookups
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    pub code: u32,
    pub kind: String,
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();

        match &self {
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            AppError::Upstream(msg) => tracing::warn!("Upstream error: {}", msg),
            _ => {}
        }

        let body = Json(ErrorResponse {
            success: false,
            code: code as u32,
            kind: format!("{:?}", code),
            error: self.user_message(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

//! Error handling for the Crop Rotation Planner service
//!
//! Provides consistent JSON error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::{CropValidationError, PlannerError};
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown season: {0}")]
    UnknownSeason(String),

    #[error("Catalog has {size} crops, the limit is {limit}")]
    CatalogTooLarge { size: usize, limit: usize },

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl From<CropValidationError> for AppError {
    fn from(err: CropValidationError) -> Self {
        AppError::Validation {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<PlannerError> for AppError {
    fn from(err: PlannerError) -> Self {
        match err {
            PlannerError::UnknownSeason(season) => AppError::UnknownSeason(season),
            PlannerError::InvalidCrop(err) => err.into(),
            PlannerError::NegativeLimit { field, .. } | PlannerError::InvalidLimit { field, .. } => {
                AppError::Validation {
                    field: field.to_string(),
                    message: err.to_string(),
                }
            }
            PlannerError::IncompleteRow(_) | PlannerError::InvalidCatalog(_) => {
                AppError::ValidationError(err.to_string())
            }
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
            AppError::UnknownSeason(season) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "UNKNOWN_SEASON".to_string(),
                    message: format!("'{}' is not a season", season),
                    field: Some("season".to_string()),
                },
            ),
            AppError::CatalogTooLarge { size, limit } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorDetail {
                    code: "CATALOG_TOO_LARGE".to_string(),
                    message: format!("Catalog has {} crops, at most {} are accepted", size, limit),
                    field: Some("crops".to_string()),
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                    field: None,
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                    field: None,
                },
            ),
        };

        // Client mistakes are expected traffic, only server faults are errors
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;

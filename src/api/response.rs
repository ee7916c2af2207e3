//! Response types for the roster engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::RosterError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed upload error response.
    pub fn malformed_upload(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_UPLOAD", message)
    }

    /// Creates a missing file-field error response.
    pub fn missing_file() -> Self {
        Self::with_details(
            "MISSING_FILE",
            "missing field: file",
            "The multipart form must contain a 'file' field with the roster workbook",
        )
    }

    /// Creates an invalid file-name error response.
    pub fn invalid_file_name(name: &str) -> Self {
        Self::new(
            "INVALID_FILE_NAME",
            format!("Invalid file name: '{}'", name),
        )
    }

    /// Creates a file-not-found error response.
    pub fn file_not_found(name: &str) -> Self {
        Self::new(
            "FILE_NOT_FOUND",
            format!("No processed file named '{}'", name),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RosterError> for ApiErrorResponse {
    fn from(error: RosterError) -> Self {
        match error {
            RosterError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            RosterError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            RosterError::MalformedTimeRange { text } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(
                    "MALFORMED_TIME_RANGE",
                    format!("Malformed time range: '{}'", text),
                ),
            },
            RosterError::WorksheetNotFound { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "WORKSHEET_NOT_FOUND",
                    format!("Worksheet not found: {}", name),
                    "The uploaded workbook does not contain the expected roster worksheet",
                ),
            },
            RosterError::SheetLayout { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "SHEET_LAYOUT",
                    "Unexpected sheet layout",
                    message,
                ),
            },
            RosterError::SpreadsheetRead { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "SPREADSHEET_READ",
                    "Failed to read the uploaded workbook",
                    message,
                ),
            },
            RosterError::SpreadsheetWrite { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "SPREADSHEET_WRITE",
                    "Failed to produce the converted workbook",
                    message,
                ),
            },
            RosterError::Staging { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STAGING_ERROR",
                    "Failed to stage the converted workbook",
                    message,
                ),
            },
        }
    }
}

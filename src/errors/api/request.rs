use crate::errors::internal::{InternalError, ItemRequestError};
use crate::errors::ValidationError;
use poem_openapi::{payload::Json, ApiResponse, Object};
use std::fmt;

/// Standardized error response for item request endpoints
#[derive(Object, Debug)]
pub struct RequestErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Item request operation error types
#[derive(ApiResponse, Debug)]
pub enum RequestError {
    /// Request body or parameters failed validation
    #[oai(status = 400)]
    InvalidInput(Json<RequestErrorResponse>),

    /// Item request not found
    #[oai(status = 404)]
    NotFound(Json<RequestErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    UnknownError(Json<RequestErrorResponse>),
}

impl RequestError {
    /// Create an InvalidInput error
    ///
    /// One uniform response for every rejection; the structured reason is
    /// only logged.
    pub fn invalid_input() -> Self {
        RequestError::InvalidInput(Json(RequestErrorResponse {
            error: "invalid_input".to_string(),
            message: "Invalid input".to_string(),
            status_code: 400,
        }))
    }

    /// Create a NotFound error
    pub fn not_found(id: &str) -> Self {
        RequestError::NotFound(Json(RequestErrorResponse {
            error: "not_found".to_string(),
            message: format!("Item request not found: {}", id),
            status_code: 404,
        }))
    }

    /// Create a generic unknown error without exposing internal details
    pub fn unknown_error() -> Self {
        RequestError::UnknownError(Json(RequestErrorResponse {
            error: "unknown_error".to_string(),
            message: "An unknown error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Convert a validator rejection to the uniform invalid-input response
    pub fn from_validation(err: ValidationError) -> Self {
        tracing::warn!("Request validation rejected: {}", err);
        Self::invalid_input()
    }

    /// Convert InternalError to RequestError
    ///
    /// This is the explicit conversion point from internal errors to API
    /// errors. Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::ItemRequest(ItemRequestError::NotFound(id)) => Self::not_found(id),
            _ => {
                tracing::error!("Unexpected error in request operation: {}", err);
                Self::unknown_error()
            }
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            RequestError::InvalidInput(json) => json.0.message.clone(),
            RequestError::NotFound(json) => json.0.message.clone(),
            RequestError::UnknownError(json) => json.0.message.clone(),
        }
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            RequestError::InvalidInput(json) => json.0.status_code,
            RequestError::NotFound(json) => json.0.status_code,
            RequestError::UnknownError(json) => json.0.status_code,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

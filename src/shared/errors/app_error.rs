use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Upstream timeout: {0}")]
    UpstreamTimeout(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Site not found: {0}")]
    SiteNotFound(String),

    #[error("No sites available: {0}")]
    NoSitesAvailable(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Request cancelled: {0}")]
    Cancelled(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Errors that an upstream site can cause on its own. The orchestrator turns
    /// these into an empty contribution instead of failing the batch.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            AppError::ApiError(_)
                | AppError::UpstreamTimeout(_)
                | AppError::SerializationError(_)
                | AppError::ExternalServiceError(_)
        )
    }

    /// Errors the caller should see as a normal "nothing to show" answer
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AppError::SiteNotFound(_) | AppError::NoSitesAvailable(_)
        )
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::UpstreamTimeout("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ExternalServiceError("Failed to connect to upstream site".to_string())
        } else if err.is_decode() {
            AppError::SerializationError(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::ApiError(format!("HTTP {}: {}", status, err))
        } else {
            AppError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

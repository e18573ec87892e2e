//! Error types for the service layer around the chunker.
//!
//! The chunker itself cannot fail; these errors come from request
//! validation and from the upstream transcript and cleaning services.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::types::ApiResponse;

/// Result type for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors surfaced to callers of the pipeline and the HTTP API.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Missing or malformed request input
    #[error("{0}")]
    InvalidInput(String),

    /// The transcript service could not provide captions
    #[error("transcript unavailable: {0:#}")]
    TranscriptUnavailable(#[source] anyhow::Error),

    /// The cleaning service failed (quota, auth, transport)
    #[error("text cleaning failed: {0:#}")]
    CleaningFailed(#[source] anyhow::Error),

    /// A collaborator required by the request is not configured
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
}

impl ServiceError {
    /// HTTP status reflecting client vs. server fault.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::TranscriptUnavailable(_) | ServiceError::CleaningFailed(_) => {
                StatusCode::BAD_GATEWAY
            }
            ServiceError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }
        (status, Json(ApiResponse::<()>::failure(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ServiceError::InvalidInput("Texto requerido".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::TranscriptUnavailable(anyhow::anyhow!("no captions")).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ServiceError::NotConfigured("text cleaner").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_messages() {
        let err = ServiceError::CleaningFailed(anyhow::anyhow!("quota exceeded"));
        assert_eq!(err.to_string(), "text cleaning failed: quota exceeded");
        assert_eq!(
            ServiceError::NotConfigured("transcript service").to_string(),
            "transcript service is not configured"
        );
    }
}

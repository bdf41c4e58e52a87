use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::DomainError;
use serde_json::json;
use tracing::error;

/// Domain error rendered as `{"detail": ...}` with a matching status code
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::InvalidDevice(_)
            | DomainError::InvalidStore(_)
            | DomainError::InvalidCampaign(_)
            | DomainError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            DomainError::Storage(_) | DomainError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = if self.0.is_client_error() {
            self.0.to_string()
        } else {
            // Internal causes stay in the logs
            error!(error = %self.0, "Request failed");
            "Internal server error".to_string()
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

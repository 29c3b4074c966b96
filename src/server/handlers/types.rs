//! Error responses for handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::languages::LanguageError;
use crate::walk::{FetchError, WalkError};

/// Failure of a walk request, mapped onto an HTTP status.
#[derive(Debug)]
pub enum ApiError {
    /// The requested language is not in the list.
    Language(LanguageError),
    /// The walk itself failed.
    Walk(WalkError),
    /// The walk task died.
    Internal(String),
}

impl From<LanguageError> for ApiError {
    fn from(err: LanguageError) -> Self {
        Self::Language(err)
    }
}

impl From<WalkError> for ApiError {
    fn from(err: WalkError) -> Self {
        Self::Walk(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Language(LanguageError::Unknown(_)) => StatusCode::BAD_REQUEST,
            Self::Language(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Walk(WalkError::Fetch(FetchError::Timeout { .. })) => StatusCode::GATEWAY_TIMEOUT,
            Self::Walk(WalkError::Fetch(_)) => StatusCode::BAD_GATEWAY,
            Self::Walk(WalkError::Cancelled) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Walk(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            // Plain text with the offending code echoed back
            Self::Language(err @ LanguageError::Unknown(_)) => {
                (status, err.to_string()).into_response()
            }
            Self::Language(err) => error_json(status, err.to_string()),
            Self::Walk(err) => error_json(status, err.to_string()),
            Self::Internal(message) => error_json(status, message),
        }
    }
}

fn error_json(status: StatusCode, message: String) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let timeout = ApiError::from(WalkError::Fetch(FetchError::Timeout {
            url: "https://en.wikipedia.org/wiki/A".to_string(),
        }));
        assert_eq!(timeout.status(), StatusCode::GATEWAY_TIMEOUT);

        let refused = ApiError::from(WalkError::Fetch(FetchError::Transport {
            url: "https://en.wikipedia.org/wiki/A".to_string(),
            message: "connection refused".to_string(),
        }));
        assert_eq!(refused.status(), StatusCode::BAD_GATEWAY);

        let status = ApiError::from(WalkError::Fetch(FetchError::Status {
            url: "https://en.wikipedia.org/wiki/A".to_string(),
            status: 500,
        }));
        assert_eq!(status.status(), StatusCode::BAD_GATEWAY);

        let unknown = ApiError::from(LanguageError::Unknown("xx".to_string()));
        assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);

        assert_eq!(
            ApiError::from(WalkError::Cancelled).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}

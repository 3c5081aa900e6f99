use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::translate::DispatchError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest { message: String },
    ServiceUnavailable { message: String },
    Internal { message: String },
}

impl ApiError {
    /// Map a dispatcher error; engine failures get `context` as a prefix.
    pub fn from_dispatch(error: DispatchError, context: &str) -> Self {
        match error {
            DispatchError::InvalidInput(message) => ApiError::BadRequest { message },
            DispatchError::ServiceUnavailable(message) => ApiError::ServiceUnavailable { message },
            DispatchError::EngineFailure(message) => ApiError::Internal {
                message: format!("{}: {}", context, message),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            ApiError::ServiceUnavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            ApiError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (
            status,
            Json(json!({
                "detail": message,
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_failure_is_prefixed() {
        let err = ApiError::from_dispatch(
            DispatchError::EngineFailure("model service returned 500: boom".to_string()),
            "Batch translation error",
        );
        match err {
            ApiError::Internal { message } => {
                assert_eq!(message, "Batch translation error: model service returned 500: boom")
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn statuses_follow_error_kind() {
        let cases = [
            (DispatchError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (DispatchError::ServiceUnavailable("x".into()), StatusCode::SERVICE_UNAVAILABLE),
            (DispatchError::EngineFailure("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, status) in cases {
            let response = ApiError::from_dispatch(error, "Translation error").into_response();
            assert_eq!(response.status(), status);
        }
    }
}

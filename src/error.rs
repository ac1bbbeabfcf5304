/*
 * Responsibility
 * - Shared AppError for the HTTP edge
 * - IntoResponse (HTTP status / JSON error body)
 * - Map gate faults (AuthcError) onto statuses
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::authc::AuthcError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("service unavailable")]
    ServiceUnavailable,
    #[error("internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::ServiceUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
            }
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_SERVER_ERROR"),
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code,
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthcError> for AppError {
    fn from(e: AuthcError) -> Self {
        match e {
            // Resolver backend is down or warming up; the client may retry
            AuthcError::Unavailable(_) => AppError::ServiceUnavailable,
            // Details stay in the logs, never in the response body
            AuthcError::Backend(_) | AuthcError::Handler(_) => AppError::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_gate_faults_to_statuses() {
        let cases = [
            (
                AuthcError::Unavailable("warming up".into()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AuthcError::Backend("db".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AuthcError::Handler("template".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (fault, status) in cases {
            assert_eq!(AppError::from(fault).into_response().status(), status);
        }
    }
}

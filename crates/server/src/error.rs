//! Application error handling

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use health_summary_core::SummaryError;
use serde::Serialize;

use crate::ai::PlatformError;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Platform project id or secret key not configured
    MissingConfig,
    Unauthorized,
    NoRecords,
    MethodNotAllowed,
    /// Anything else; the detail is logged, never returned
    SummaryFailed(String),
}

/// `{"error": "..."}` envelope shared by every failure response
#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingConfig | AppError::SummaryFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NoRecords => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            AppError::MissingConfig => "Missing config",
            AppError::Unauthorized => "Unauthorized",
            AppError::NoRecords => "No records provided",
            AppError::MethodNotAllowed => "Method not allowed",
            AppError::SummaryFailed(_) => "Failed to generate summary",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MissingConfig => {
                tracing::error!("BLINK_PROJECT_ID or BLINK_SECRET_KEY not configured");
            }
            AppError::SummaryFailed(detail) => {
                tracing::error!(error = %detail, "AI summary generation failed");
                metrics::counter!("summary_failures_total").increment(1);
            }
            AppError::Unauthorized | AppError::NoRecords | AppError::MethodNotAllowed => {}
        }

        let body = ErrorBody {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<SummaryError> for AppError {
    fn from(err: SummaryError) -> Self {
        match err {
            SummaryError::NoRecords => AppError::NoRecords,
            SummaryError::Malformed(e) => {
                AppError::SummaryFailed(format!("Malformed request body: {e}"))
            }
        }
    }
}

impl From<PlatformError> for AppError {
    fn from(err: PlatformError) -> Self {
        AppError::SummaryFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_variant_to_status_and_message() {
        let cases = [
            (
                AppError::MissingConfig,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Missing config",
            ),
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED, "Unauthorized"),
            (
                AppError::NoRecords,
                StatusCode::BAD_REQUEST,
                "No records provided",
            ),
            (
                AppError::MethodNotAllowed,
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed",
            ),
            (
                AppError::SummaryFailed("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to generate summary",
            ),
        ];

        for (err, status, message) in cases {
            assert_eq!(err.status(), status);
            assert_eq!(err.message(), message);
        }
    }

    #[test]
    fn malformed_body_is_a_generic_failure() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::from(SummaryError::Malformed(parse_err));
        assert!(matches!(err, AppError::SummaryFailed(_)));
    }

    #[test]
    fn platform_errors_keep_detail_internally() {
        let err = AppError::from(PlatformError::Api {
            status: 502,
            message: "upstream".to_string(),
        });
        match err {
            AppError::SummaryFailed(detail) => assert!(detail.contains("upstream")),
            other => panic!("unexpected {other:?}"),
        }
    }
}

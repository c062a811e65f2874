use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use skillforge_core::error::CoreError;
use skillforge_db::StoreError;
use skillforge_github::ScanError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds store, upstream and
/// HTTP-specific variants. Implements [`IntoResponse`] to produce the
/// `{ success: false, error, code }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `skillforge_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The record store failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The GitHub scanner failed or rejected the scan.
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// A required upstream integration is unavailable.
    #[error("Upstream unavailable: {0}")]
    Upstream(String),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            // --- Store errors ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                internal()
            }

            // --- Upstream errors ---
            AppError::Scan(ScanError::Rejected(msg)) => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                format!("GitHub scan failed: {msg}"),
            ),
            AppError::Scan(err) => {
                tracing::error!(error = %err, "GitHub scanner error");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "GitHub scanner is unavailable".to_string(),
                )
            }
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", msg.clone()),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "success": false,
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use trackco_core::error::CoreError;

use crate::response::{ErrorResponse, MessageResponse};

/// Message returned when a request body is missing or unparseable.
pub const INVALID_REQUEST: &str = "Invalid request";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`]: expected conditions become `{ "message" }`
/// with a 4xx status, everything else becomes `{ "error": true, "message" }`
/// with a 500 and is logged.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `trackco_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx with no operation context attached.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database error raised while running the named operation.
    #[error("Database error while {operation}: {source}")]
    Store {
        operation: String,
        #[source]
        source: sqlx::Error,
    },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Attach the running operation to a store error.
///
/// The operation is phrased to complete "error occurred while ...", e.g.
/// `"fetching widget with ID 7 with NPS records"`.
pub trait StoreContext<T> {
    fn during<F>(self, operation: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> StoreContext<T> for Result<T, sqlx::Error> {
    fn during<F>(self, operation: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|source| AppError::Store {
            operation: operation(),
            source,
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(CoreError::NotFound { entity, .. }) => {
                not_found(format!("{entity} not found"))
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(MessageResponse::new(msg))).into_response()
            }
            AppError::Database(sqlx::Error::RowNotFound) => not_found("Resource not found".into()),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal("Internal server error occurred".into())
            }
            AppError::Store { operation, source } => {
                tracing::error!(
                    error = %source,
                    operation = %operation,
                    "Store operation failed"
                );
                internal(format!("Internal server error occurred while {operation}"))
            }
        }
    }
}

fn not_found(message: String) -> Response {
    (StatusCode::NOT_FOUND, Json(MessageResponse::new(message))).into_response()
}

fn internal(message: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(message)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn during_wraps_error_with_operation() {
        let result: Result<(), sqlx::Error> = Err(sqlx::Error::PoolTimedOut);
        let err = result.during(|| "deleting widget with ID 4".to_string()).unwrap_err();
        assert_matches!(
            err,
            AppError::Store { ref operation, source: sqlx::Error::PoolTimedOut }
                if operation == "deleting widget with ID 4"
        );
    }

    #[test]
    fn during_leaves_ok_untouched() {
        let result: Result<i32, sqlx::Error> = Ok(5);
        let value = result.during(|| unreachable!("operation is only built on error"));
        assert_matches!(value, Ok(5));
    }
}

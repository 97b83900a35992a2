use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use callsheet_core::error::CoreError;
use callsheet_db::repositories::InstantiationError;

/// Name of the unique constraint backing the one-(production, person,
/// talent-name) invariant; violations get their own error code so the UI can
/// say "already assigned" instead of a generic conflict.
const DUPLICATE_ASSIGNMENT_CONSTRAINT: &str = "uq_staff_assignments_production_person_talent";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `callsheet_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A template instantiation failure from the persistence layer.
    #[error(transparent)]
    Instantiation(#[from] InstantiationError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or malformed caller identity.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => classify_core_error(core),

            AppError::Instantiation(err) => match err {
                InstantiationError::TemplateNotFound { category_id } => (
                    StatusCode::NOT_FOUND,
                    "TEMPLATE_NOT_FOUND",
                    format!("Category {category_id} no longer exists"),
                ),
                InstantiationError::MissingTalent { template_id } => (
                    StatusCode::CONFLICT,
                    "MISSING_TALENT",
                    format!(
                        "Demand template {template_id} references a talent that was deleted; \
                         fix the category templates and retry"
                    ),
                ),
                InstantiationError::Hierarchy(core) => classify_core_error(core),
                InstantiationError::Database(db) => classify_sqlx_error(db),
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a [`CoreError`] to an HTTP status, error code, and message.
///
/// `MalformedHierarchy` is stored-data corruption: logged as a server defect
/// and reported as a 500 without internal detail.
fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::MalformedHierarchy { node_id } => {
            tracing::error!(node_id, "Malformed hierarchy in stored data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - The duplicate-assignment unique constraint maps to 409
///   `DUPLICATE_ASSIGNMENT`; other `uq_` constraints map to a generic 409.
/// - Foreign key violations (23503) map to 400 `REFERENTIAL_VIOLATION`.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint == DUPLICATE_ASSIGNMENT_CONSTRAINT {
                    return (
                        StatusCode::CONFLICT,
                        "DUPLICATE_ASSIGNMENT",
                        "This person is already assigned to that talent slot".to_string(),
                    );
                }
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            // PostgreSQL foreign key violation: error code 23503
            if db_err.code().as_deref() == Some("23503") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return (
                    StatusCode::BAD_REQUEST,
                    "REFERENTIAL_VIOLATION",
                    format!("A referenced row does not exist (constraint: {constraint})"),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

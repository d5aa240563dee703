//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// PostgreSQL SQLSTATE for `lock_not_available`, raised when a row lock
/// cannot be acquired within the session `lock_timeout`.
const PG_LOCK_NOT_AVAILABLE: &str = "55P03";

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Authentication Errors**: Invalid or missing API keys
/// - **Resource Errors**: Requested resources not found
/// - **Business Logic Errors**: Operations that violate ledger rules
/// - **Validation Errors**: Invalid request data
/// - **Transient Errors**: Bounded lock waits that expired; safe to retry
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// Constructed through the manual `From<sqlx::Error>` impl below, which
    /// first peels off lock-timeout errors into their own variant.
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// A row lock could not be acquired within the configured bound.
    ///
    /// The enclosing transaction was aborted with no side effects. The whole
    /// operation is safe to retry; the service never retries on its own.
    ///
    /// Returns HTTP 503 Service Unavailable.
    #[error("Lock wait timed out, retry the operation")]
    LockTimeout,

    /// API key is missing, invalid, or inactive.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// Requested account does not exist or doesn't belong to the
    /// authenticated business.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Account not found")]
    AccountNotFound,

    /// Requested phone number does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Phone number not found")]
    PhoneNumberNotFound,

    /// Requested credit request does not exist or doesn't belong to the
    /// authenticated business.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Credit request not found")]
    CreditRequestNotFound,

    /// Requested charge sale does not exist or doesn't belong to the
    /// authenticated business.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Charge sale not found")]
    ChargeSaleNotFound,

    /// The credit request was already approved or rejected.
    ///
    /// This is the idempotency guard: a repeated or concurrent approval of
    /// the same request must never credit the account twice.
    ///
    /// Returns HTTP 409 Conflict.
    #[error("Credit request already processed")]
    AlreadyProcessed,

    /// Account credit is below the requested charge amount.
    ///
    /// Returns HTTP 422 Unprocessable Entity.
    #[error("Insufficient credit")]
    InsufficientCredit,

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// Convert sqlx errors into AppError.
///
/// Lock-wait expiry (SQLSTATE 55P03) is surfaced as the transient
/// `LockTimeout` kind so callers can distinguish "retry the whole operation"
/// from a genuine database failure. Everything else wraps as `Database`.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.code().as_deref() == Some(PG_LOCK_NOT_AVAILABLE) {
                return AppError::LockTimeout;
            }
        }
        AppError::Database(err)
    }
}

impl AppError {
    /// Stable machine-readable error code for the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "internal_error",
            AppError::LockTimeout => "lock_timeout",
            AppError::InvalidApiKey => "invalid_api_key",
            AppError::AccountNotFound => "account_not_found",
            AppError::PhoneNumberNotFound => "phone_number_not_found",
            AppError::CreditRequestNotFound => "credit_request_not_found",
            AppError::ChargeSaleNotFound => "charge_sale_not_found",
            AppError::AlreadyProcessed => "already_processed",
            AppError::InsufficientCredit => "insufficient_credit",
            AppError::InvalidRequest(_) => "invalid_request",
        }
    }

    /// HTTP status code for the variant.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::LockTimeout => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InvalidApiKey => StatusCode::UNAUTHORIZED,
            AppError::AccountNotFound
            | AppError::PhoneNumberNotFound
            | AppError::CreditRequestNotFound
            | AppError::ChargeSaleNotFound => StatusCode::NOT_FOUND,
            AppError::AlreadyProcessed => StatusCode::CONFLICT,
            AppError::InsufficientCredit => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        // Database details are logged, never sent to the client
        let message = match self {
            AppError::Database(ref err) => {
                tracing::error!("database error: {err}");
                "An internal error occurred".to_string()
            }
            AppError::InvalidRequest(ref msg) => msg.clone(),
            ref other => other.to_string(),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_errors_map_to_documented_status_codes() {
        assert_eq!(
            AppError::InvalidRequest("amount must be positive".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidApiKey.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::AccountNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::PhoneNumberNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::CreditRequestNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::AlreadyProcessed.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::InsufficientCredit.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::LockTimeout.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn error_codes_are_stable() {
        assert_eq!(AppError::AlreadyProcessed.code(), "already_processed");
        assert_eq!(AppError::InsufficientCredit.code(), "insufficient_credit");
        assert_eq!(AppError::LockTimeout.code(), "lock_timeout");
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).code(),
            "internal_error"
        );
    }

    #[test]
    fn plain_sqlx_errors_wrap_as_database() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::Database(_)));
    }
}

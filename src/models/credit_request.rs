//! Credit request data models and API request/response types.
//!
//! This module defines:
//! - `CreditRequest`: Database entity for a pending/approved credit top-up
//! - `CreateCreditRequestRequest`: Request body for opening a request
//! - `CreditRequestResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::status::TransactionStatus;

/// Represents a credit request record from the database.
///
/// # Database Table
///
/// Maps to the `credit_requests` table. A credit request is an audit record:
/// it is inserted as `(PENDING, processed=false)` and transitions exactly
/// once, under its row lock, to `(APPROVED, processed=true)` when approval
/// credits the owning account. After that it is immutable.
///
/// `processed` is true iff `status != PENDING`; the approval path checks it
/// under lock so a request can never be applied twice.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct CreditRequest {
    /// Unique identifier for this request
    pub id: i64,

    /// Account that asked for credit and receives it on approval
    pub account_id: Uuid,

    /// Requested credit, in the ledger base unit (always positive)
    pub amount: i64,

    /// Lifecycle status (PENDING until approved)
    pub status: TransactionStatus,

    /// Terminal flag; set together with the status transition
    pub processed: bool,

    /// Free-form operator notes
    pub admin_notes: String,

    /// When the request was opened
    pub created_at: DateTime<Utc>,

    /// When the request last changed state
    pub updated_at: DateTime<Utc>,
}

/// Request body for opening a credit request.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "amount": 5000
/// }
/// ```
///
/// # Validation
///
/// - `amount` must be positive; checked by the service before any lock
#[derive(Debug, Deserialize)]
pub struct CreateCreditRequestRequest {
    /// Account asking for credit
    pub account_id: Uuid,

    /// Requested credit in the ledger base unit
    pub amount: i64,
}

/// Response returned for credit request operations.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 42,
///   "account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "amount": 5000,
///   "status": "APPROVED",
///   "processed": true,
///   "created_at": "2026-08-01T09:00:00Z",
///   "updated_at": "2026-08-01T09:05:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct CreditRequestResponse {
    pub id: i64,
    pub account_id: Uuid,
    pub amount: i64,
    pub status: TransactionStatus,
    pub processed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Convert database CreditRequest to API CreditRequestResponse.
///
/// Operator notes stay internal.
impl From<CreditRequest> for CreditRequestResponse {
    fn from(request: CreditRequest) -> Self {
        Self {
            id: request.id,
            account_id: request.account_id,
            amount: request.amount,
            status: request.status,
            processed: request.processed,
            created_at: request.created_at,
            updated_at: request.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request(status: TransactionStatus, processed: bool) -> CreditRequest {
        let now = Utc::now();
        CreditRequest {
            id: 42,
            account_id: Uuid::new_v4(),
            amount: 5000,
            status,
            processed,
            admin_notes: "seeded by ops".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn response_carries_status_and_processed_flag() {
        let response: CreditRequestResponse =
            sample_request(TransactionStatus::Approved, true).into();
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["status"], "APPROVED");
        assert_eq!(body["processed"], true);
    }

    #[test]
    fn response_hides_admin_notes() {
        let response: CreditRequestResponse =
            sample_request(TransactionStatus::Pending, false).into();
        let body = serde_json::to_value(&response).unwrap();
        assert!(body.get("admin_notes").is_none());
        assert_eq!(body["status"], "PENDING");
    }
}

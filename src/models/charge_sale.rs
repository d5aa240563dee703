//! Charge sale data models and API request/response types.
//!
//! This module defines:
//! - `ChargeSale`: Database entity recording a completed top-up sale
//! - `CreateChargeSaleRequest`: Request body for buying a charge
//! - `ChargeSaleResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::status::TransactionStatus;

/// Represents a charge sale record from the database.
///
/// # Database Table
///
/// Maps to the `charge_sales` table. Unlike credit requests, sales are
/// synchronous: the row is inserted already terminal
/// (`status=APPROVED, processed=true`) inside the same transaction that
/// debits the account and credits the phone number. A sale row therefore
/// always witnesses a completed, conserved transfer of value.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ChargeSale {
    /// Unique identifier for this sale
    pub id: i64,

    /// Account whose credit paid for the charge
    pub account_id: Uuid,

    /// Phone number that received the charge
    pub phone_number_id: i64,

    /// Charge amount, in the ledger base unit (always positive)
    pub amount: i64,

    /// Lifecycle status (always APPROVED for sales)
    pub status: TransactionStatus,

    /// Terminal flag (always true for sales)
    pub processed: bool,

    /// Free-form operator notes
    pub admin_notes: String,

    /// Opaque provider payload slot; unused by the ledger core
    pub api_response: Option<serde_json::Value>,

    /// When the sale was recorded
    pub created_at: DateTime<Utc>,

    /// When the sale row last changed
    pub updated_at: DateTime<Utc>,
}

/// Request body for buying a charge.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "amount": 50,
///   "phone_number_id": 7
/// }
/// ```
///
/// # Validation
///
/// - `amount` must be positive; checked by the service before any lock
/// - The account must hold at least `amount` credit at debit time
#[derive(Debug, Deserialize)]
pub struct CreateChargeSaleRequest {
    /// Account paying for the charge
    pub account_id: Uuid,

    /// Charge amount in the ledger base unit
    pub amount: i64,

    /// Phone number receiving the charge
    pub phone_number_id: i64,
}

/// Response returned for charge sale operations.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 9,
///   "account_id": "550e8400-e29b-41d4-a716-446655440000",
///   "phone_number_id": 7,
///   "amount": 50,
///   "status": "APPROVED",
///   "processed": true,
///   "created_at": "2026-08-01T09:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ChargeSaleResponse {
    pub id: i64,
    pub account_id: Uuid,
    pub phone_number_id: i64,
    pub amount: i64,
    pub status: TransactionStatus,
    pub processed: bool,
    pub created_at: DateTime<Utc>,
}

/// Convert database ChargeSale to API ChargeSaleResponse.
///
/// Operator notes and the raw provider payload stay internal.
impl From<ChargeSale> for ChargeSaleResponse {
    fn from(sale: ChargeSale) -> Self {
        Self {
            id: sale.id,
            account_id: sale.account_id,
            phone_number_id: sale.phone_number_id,
            amount: sale.amount,
            status: sale.status,
            processed: sale.processed,
            created_at: sale.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_hides_provider_payload_and_notes() {
        let now = Utc::now();
        let sale = ChargeSale {
            id: 9,
            account_id: Uuid::new_v4(),
            phone_number_id: 7,
            amount: 50,
            status: TransactionStatus::Approved,
            processed: true,
            admin_notes: String::new(),
            api_response: Some(serde_json::json!({"provider": "stub"})),
            created_at: now,
            updated_at: now,
        };

        let response: ChargeSaleResponse = sale.into();
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["status"], "APPROVED");
        assert_eq!(body["processed"], true);
        assert!(body.get("api_response").is_none());
        assert!(body.get("admin_notes").is_none());
    }
}

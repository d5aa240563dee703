//! Phone number data models and API response types.
//!
//! This module defines:
//! - `PhoneNumber`: Database entity holding a number's accrued charge balance
//! - `PhoneNumberResponse`: Response body returned to clients
//!
//! Phone numbers are provisioned operator-side (seed data or direct SQL);
//! the API only reads them and charges them through sales.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Represents a phone number record from the database.
///
/// # Database Table
///
/// Maps to the `phone_numbers` table.
///
/// # Charge Balance
///
/// `current_charge` is the accrued total of all charge sales against this
/// number, in the ledger base unit. It only grows: charge sales are the
/// single code path that mutates it, always under the row's exclusive lock
/// within the sale's transaction. Must be >= 0 (database CHECK constraint).
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct PhoneNumber {
    /// Unique identifier for this phone number
    pub id: i64,

    /// The phone number itself (unique)
    pub number: String,

    /// Optional human-readable label (e.g., operator or campaign name)
    pub title: String,

    /// Whether this number can currently receive charges
    ///
    /// Inactive numbers stay readable for audit but are excluded from
    /// the active listing.
    pub is_active: bool,

    /// Accrued charge total, in the ledger base unit
    pub current_charge: i64,

    /// Timestamp when the number was registered
    pub created_at: DateTime<Utc>,

    /// Timestamp of last charge update
    pub updated_at: DateTime<Utc>,
}

/// Response body for phone number endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 7,
///   "number": "09120000001",
///   "title": "Operator A",
///   "is_active": true
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct PhoneNumberResponse {
    /// Phone number identifier
    pub id: i64,

    /// The phone number
    pub number: String,

    /// Human-readable label
    pub title: String,

    /// Whether the number accepts charges
    pub is_active: bool,
}

/// Convert database PhoneNumber to API PhoneNumberResponse.
///
/// The accrued charge balance and timestamps are internal bookkeeping and
/// are not exposed to API clients.
impl From<PhoneNumber> for PhoneNumberResponse {
    fn from(phone: PhoneNumber) -> Self {
        Self {
            id: phone.id,
            number: phone.number,
            title: phone.title,
            is_active: phone.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_hides_charge_balance() {
        let now = Utc::now();
        let phone = PhoneNumber {
            id: 7,
            number: "09120000001".to_string(),
            title: "Operator A".to_string(),
            is_active: true,
            current_charge: 4200,
            created_at: now,
            updated_at: now,
        };

        let response: PhoneNumberResponse = phone.into();
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["id"], 7);
        assert_eq!(body["number"], "09120000001");
        assert!(body.get("current_charge").is_none());
        assert!(body.get("updated_at").is_none());
    }
}

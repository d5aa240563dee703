//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: Database entity holding a prepaid credit balance
//! - `CreateAccountRequest`: Request body for creating accounts
//! - `AccountResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table. Each account:
/// - Belongs to one business (via `api_key_id`)
/// - Holds a prepaid credit balance in the ledger base unit
///
/// # Credit Storage
///
/// Credit is stored as `i64` in the ledger's base unit to avoid
/// floating-point precision issues. A database CHECK constraint keeps it
/// non-negative at every committed state, and the only code paths that
/// mutate it hold the row's exclusive lock inside a transaction.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Account {
    /// Unique identifier for this account
    pub id: Uuid,

    /// Foreign key to the API key (business) that owns this account
    ///
    /// Queries always filter by `api_key_id` so one business can never read
    /// or spend another business's accounts.
    pub api_key_id: Uuid,

    /// Human-readable name for this account
    pub account_name: String,

    /// Spendable prepaid credit, in the ledger base unit
    ///
    /// Decremented only by charge sales, incremented only by approved
    /// credit requests. Must be >= 0 (enforced by database CHECK constraint).
    pub credit: i64,

    /// Timestamp when account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of last credit update
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_name": "Retail kiosk 12",
///   "initial_credit": 0
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Name for the new account
    pub account_name: String,

    /// Starting credit (defaults to 0 if not provided)
    #[serde(default)]
    pub initial_credit: i64,
}

/// Response body for account endpoints.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    /// Account unique identifier
    pub id: Uuid,

    /// Account name
    pub account_name: String,

    /// Current spendable credit
    pub credit: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Convert database Account to API AccountResponse.
///
/// Drops the internal `api_key_id` ownership field.
impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            account_name: account.account_name,
            credit: account.credit,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_hides_owning_api_key() {
        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            api_key_id: Uuid::new_v4(),
            account_name: "kiosk".to_string(),
            credit: 150,
            created_at: now,
            updated_at: now,
        };

        let response: AccountResponse = account.clone().into();
        assert_eq!(response.id, account.id);
        assert_eq!(response.credit, 150);

        let body = serde_json::to_value(&response).unwrap();
        assert!(body.get("api_key_id").is_none());
    }

    #[test]
    fn create_request_defaults_initial_credit_to_zero() {
        let request: CreateAccountRequest =
            serde_json::from_str(r#"{"account_name": "kiosk"}"#).unwrap();
        assert_eq!(request.initial_credit, 0);
    }
}

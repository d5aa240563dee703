//! API Key model for authentication.
//!
//! Businesses authenticate with API keys, stored as SHA-256 hashes. Every
//! account, credit request, and charge sale is scoped to the key that
//! created it.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Represents an API key record from the database.
///
/// Maps to the `api_keys` table. Authentication hashes the presented key
/// and looks the digest up here; inactive keys are rejected, which allows
/// revoking access without deleting the row (and with it the ownership
/// history of the business's ledger records).
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApiKey {
    /// Unique identifier for this API key
    pub id: Uuid,

    /// SHA-256 hash of the actual API key (64 hex characters)
    pub key_hash: String,

    /// Human-readable name of the business using this API key
    pub business_name: String,

    /// Timestamp when this API key was created
    pub created_at: DateTime<Utc>,

    /// Whether this API key is currently active
    pub is_active: bool,
}

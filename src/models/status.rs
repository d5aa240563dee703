//! Shared lifecycle status for credit requests and charge sales.

use serde::{Deserialize, Serialize};

/// Lifecycle status shared by credit requests and charge sales.
///
/// The only legal transition is `PENDING -> {APPROVED, REJECTED}`, after
/// which the record is terminal. Charge sales skip `PENDING` entirely and
/// are inserted directly as `APPROVED`.
///
/// `REJECTED` is a legal stored value but no operation currently produces
/// it; requests either stay pending or get approved.
///
/// Stored as TEXT in the database (`PENDING` / `APPROVED` / `REJECTED`),
/// enforced by a CHECK constraint on both tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
    Pending,
    Approved,
    Rejected,
}

impl TransactionStatus {
    /// Database/API representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::Approved => "APPROVED",
            TransactionStatus::Rejected => "REJECTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_uppercase_wire_values() {
        assert_eq!(
            serde_json::to_string(&TransactionStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionStatus::Approved).unwrap(),
            "\"APPROVED\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionStatus::Rejected).unwrap(),
            "\"REJECTED\""
        );
    }

    #[test]
    fn rejects_unknown_status_values() {
        assert!(serde_json::from_str::<TransactionStatus>("\"CANCELLED\"").is_err());
        assert!(serde_json::from_str::<TransactionStatus>("\"pending\"").is_err());
    }

    #[test]
    fn as_str_matches_serde_representation() {
        for status in [
            TransactionStatus::Pending,
            TransactionStatus::Approved,
            TransactionStatus::Rejected,
        ] {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire, format!("\"{}\"", status.as_str()));
        }
    }
}

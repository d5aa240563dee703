//! Business logic services.
//!
//! Services contain the transactional ledger core separated from HTTP
//! handlers. Each operation opens one database transaction, takes its row
//! locks in a fixed order, validates state, mutates, and commits or rolls
//! back as a unit.

pub mod charge_service;
pub mod credit_service;

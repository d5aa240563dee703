//! HTTP middleware components.
//!
//! Middleware are functions that run before route handlers. Here that is
//! just API-key authentication; it rejects unauthorized requests before
//! they reach any ledger code.

/// API key authentication middleware
pub mod auth;

//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Scopes the operation to the authenticated business
//! 3. Delegates ledger work to the services and returns JSON

/// Account management endpoints
pub mod accounts;
/// Charge sale endpoints
pub mod charge_sales;
/// Credit request endpoints
pub mod credit_requests;
/// Health check endpoint
pub mod health;
/// Phone number endpoints
pub mod phone_numbers;

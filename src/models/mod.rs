//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables,
//! plus the request/response types the HTTP boundary exchanges with clients.

/// API key authentication model
pub mod api_key;
/// Prepaid credit account model
pub mod account;
/// Chargeable phone number model
pub mod phone_number;
/// Credit request (top-up) model
pub mod credit_request;
/// Charge sale model
pub mod charge_sale;
/// Shared lifecycle status
pub mod status;

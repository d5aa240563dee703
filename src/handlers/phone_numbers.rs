//! Phone number HTTP handlers.
//!
//! This module implements the read-only phone number endpoints:
//! - GET /api/v1/phone-numbers - List active phone numbers
//! - GET /api/v1/phone-numbers/:id - Get one phone number
//!
//! Phone numbers are shared, not owned: every authenticated business sees
//! the same listing. Reads take no locks and may observe a charge balance
//! that a concurrent sale is about to overtake.

use crate::{db::DbPool, error::AppError, ledger, models::phone_number::PhoneNumberResponse};
use axum::{
    Json,
    extract::{Path, State},
};

/// List all phone numbers currently accepting charges.
pub async fn list_phone_numbers(
    State(pool): State<DbPool>,
) -> Result<Json<Vec<PhoneNumberResponse>>, AppError> {
    let phones = ledger::phones::list_active(&pool).await?;

    let responses: Vec<PhoneNumberResponse> = phones.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// Get a phone number by ID.
///
/// Inactive numbers are still readable; they are only excluded from the
/// active listing.
pub async fn get_phone_number(
    State(pool): State<DbPool>,
    Path(phone_id): Path<i64>,
) -> Result<Json<PhoneNumberResponse>, AppError> {
    let phone = ledger::phones::load(&pool, phone_id).await?;

    Ok(Json(phone.into()))
}

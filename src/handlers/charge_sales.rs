//! Charge sale HTTP handlers.
//!
//! This module implements the charge sale API endpoints:
//! - POST /api/v1/charge-sales - Buy a charge for a phone number
//! - GET /api/v1/charge-sales/:id - Get sale details

use crate::{
    db::DbPool,
    error::AppError,
    middleware::auth::AuthContext,
    models::charge_sale::{ChargeSaleResponse, CreateChargeSaleRequest},
    services::charge_service,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// Buy a charge: spend account credit on a phone number.
///
/// # Request Body
///
/// ```json
/// {
///   "account_id": "550e8400-...",
///   "amount": 50,
///   "phone_number_id": 7
/// }
/// ```
///
/// # Atomicity
///
/// The account debit, the phone's charge increase, and the sale record are
/// one database transaction; a 422 `insufficient_credit` response
/// guarantees nothing was mutated.
pub async fn create_charge_sale(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateChargeSaleRequest>,
) -> Result<Json<ChargeSaleResponse>, AppError> {
    // Verify account belongs to authenticated business
    let account_id: Uuid =
        sqlx::query_scalar("SELECT id FROM accounts WHERE id = $1 AND api_key_id = $2")
            .bind(request.account_id)
            .bind(auth.api_key_id)
            .fetch_optional(&pool)
            .await?
            .ok_or(AppError::AccountNotFound)?;

    let sale =
        charge_service::create_sale(&pool, account_id, request.amount, request.phone_number_id)
            .await?;

    Ok(Json(sale.into()))
}

/// Get a charge sale by ID.
///
/// # Security
///
/// Returns 404 unless the sale's paying account belongs to the
/// authenticated business.
pub async fn get_charge_sale(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Path(sale_id): Path<i64>,
) -> Result<Json<ChargeSaleResponse>, AppError> {
    let sale = charge_service::get_sale_by_id(&pool, sale_id)
        .await?
        .ok_or(AppError::ChargeSaleNotFound)?;

    let has_access: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM accounts WHERE id = $1 AND api_key_id = $2)")
            .bind(sale.account_id)
            .bind(auth.api_key_id)
            .fetch_one(&pool)
            .await?;

    if !has_access {
        return Err(AppError::ChargeSaleNotFound);
    }

    Ok(Json(sale.into()))
}

//! Credit request HTTP handlers.
//!
//! This module implements the credit request API endpoints:
//! - POST /api/v1/credit-requests - Open a pending credit request
//! - GET /api/v1/credit-requests - List requests for the business's accounts
//! - POST /api/v1/credit-requests/:id/approve - Approve a pending request

use crate::{
    db::DbPool,
    error::AppError,
    middleware::auth::AuthContext,
    models::credit_request::{CreateCreditRequestRequest, CreditRequestResponse},
    services::credit_service,
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// Open a credit request for one of the business's accounts.
///
/// # Request Body
///
/// ```json
/// {
///   "account_id": "550e8400-...",
///   "amount": 5000
/// }
/// ```
///
/// # Response
///
/// The created request, `status=PENDING, processed=false`. No credit moves
/// until the request is approved.
pub async fn create_credit_request(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateCreditRequestRequest>,
) -> Result<Json<CreditRequestResponse>, AppError> {
    // Verify account belongs to authenticated business
    let account_id: Uuid =
        sqlx::query_scalar("SELECT id FROM accounts WHERE id = $1 AND api_key_id = $2")
            .bind(request.account_id)
            .bind(auth.api_key_id)
            .fetch_optional(&pool)
            .await?
            .ok_or(AppError::AccountNotFound)?;

    let created = credit_service::create_request(&pool, account_id, request.amount).await?;

    Ok(Json(created.into()))
}

/// List credit requests for all of the business's accounts, newest first.
pub async fn list_credit_requests(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<CreditRequestResponse>>, AppError> {
    let requests = credit_service::list_requests_for_api_key(&pool, auth.api_key_id).await?;

    let responses: Vec<CreditRequestResponse> = requests.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// Approve a pending credit request.
///
/// # Idempotency
///
/// Approving the same request twice returns 409 with code
/// `already_processed`; the account is credited exactly once no matter how
/// many approvals race.
///
/// # Security
///
/// The request must belong to one of the authenticated business's accounts;
/// foreign requests answer 404.
pub async fn approve_credit_request(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Path(request_id): Path<i64>,
) -> Result<Json<CreditRequestResponse>, AppError> {
    // Ownership check: unlocked read, the service re-reads under lock
    let owned: Option<i64> = sqlx::query_scalar(
        r#"
        SELECT cr.id
        FROM credit_requests cr
        JOIN accounts a ON a.id = cr.account_id
        WHERE cr.id = $1 AND a.api_key_id = $2
        "#,
    )
    .bind(request_id)
    .bind(auth.api_key_id)
    .fetch_optional(&pool)
    .await?;

    if owned.is_none() {
        return Err(AppError::CreditRequestNotFound);
    }

    let approved = credit_service::approve_request(&pool, request_id, auth.api_key_id).await?;

    Ok(Json(approved.into()))
}

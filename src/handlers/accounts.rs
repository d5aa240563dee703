//! Account management HTTP handlers.
//!
//! This module implements the account-related API endpoints:
//! - POST /api/v1/accounts - Create new account
//! - GET /api/v1/accounts/:id - Get account by ID
//! - GET /api/v1/accounts - List all accounts for authenticated business

use crate::{
    db::DbPool,
    error::AppError,
    middleware::auth::AuthContext,
    models::account::{Account, AccountResponse, CreateAccountRequest},
};
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// Create a new account.
///
/// # Request Body
///
/// ```json
/// {
///   "account_name": "Retail kiosk 12",
///   "initial_credit": 0
/// }
/// ```
///
/// The account is linked to the authenticated business; `initial_credit`
/// defaults to 0 and may not be negative (the credit column carries a
/// CHECK constraint, but the precondition is rejected here with a 400
/// before any insert is attempted).
pub async fn create_account(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    if request.initial_credit < 0 {
        return Err(AppError::InvalidRequest(
            "Initial credit may not be negative".to_string(),
        ));
    }

    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (api_key_id, account_name, credit)
        VALUES ($1, $2, $3)
        RETURNING id, api_key_id, account_name, credit, created_at, updated_at
        "#,
    )
    .bind(auth.api_key_id)
    .bind(request.account_name)
    .bind(request.initial_credit)
    .fetch_one(&pool)
    .await?;

    Ok(Json(account.into()))
}

/// Get a specific account by ID.
///
/// # Security
///
/// The query filters by BOTH `id` AND `api_key_id`: a business can only
/// read its own accounts, and foreign accounts answer 404 rather than 403
/// so their existence is never leaked.
pub async fn get_account(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, api_key_id, account_name, credit, created_at, updated_at
        FROM accounts
        WHERE id = $1 AND api_key_id = $2
        "#,
    )
    .bind(account_id)
    .bind(auth.api_key_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::AccountNotFound)?;

    Ok(Json(account.into()))
}

/// List all accounts for the authenticated business, newest first.
///
/// This is a plain read: no locks are taken and the credit values may lag
/// behind sales committing concurrently.
pub async fn list_accounts(
    State(pool): State<DbPool>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let accounts = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, api_key_id, account_name, credit, created_at, updated_at
        FROM accounts
        WHERE api_key_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(auth.api_key_id)
    .fetch_all(&pool)
    .await?;

    let responses: Vec<AccountResponse> = accounts.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

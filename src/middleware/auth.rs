//! API key authentication middleware.
//!
//! Every `/api/v1` request carries `Authorization: Bearer <key>`. The
//! middleware hashes the key, looks the digest up in `api_keys`, and
//! injects an [`AuthContext`] for handlers; anything else is a 401.

use crate::{db::DbPool, error::AppError, models::api_key::ApiKey};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Authentication context attached to authenticated requests.
///
/// Inserted into the request's extension map; handlers extract it with
/// `Extension<AuthContext>` and use `api_key_id` to scope every query to
/// the calling business's own rows.
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// ID of the authenticated API key
    pub api_key_id: Uuid,

    /// Name of the business making the request
    pub business_name: String,
}

/// API key authentication middleware function.
///
/// Extracts the bearer token, hashes it with SHA-256, and matches the hash
/// against active keys. Keys are never stored or compared in plaintext.
///
/// # Errors
///
/// `AppError::InvalidApiKey` (HTTP 401) when the header is missing,
/// malformed, unknown, or belongs to a deactivated key.
pub async fn auth_middleware(
    State(pool): State<DbPool>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::InvalidApiKey)?;

    let api_key = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::InvalidApiKey)?;

    let mut hasher = Sha256::new();
    hasher.update(api_key.as_bytes());
    let key_hash = hex::encode(hasher.finalize());

    let api_key_record = sqlx::query_as::<_, ApiKey>(
        "SELECT id, key_hash, business_name, created_at, is_active
         FROM api_keys
         WHERE key_hash = $1 AND is_active = true",
    )
    .bind(&key_hash)
    .fetch_optional(&pool)
    .await?
    .ok_or(AppError::InvalidApiKey)?;

    request.extensions_mut().insert(AuthContext {
        api_key_id: api_key_record.id,
        business_name: api_key_record.business_name,
    });

    Ok(next.run(request).await)
}

//! Account credit ledger: locked reads and balance writes.

use sqlx::PgConnection;
use uuid::Uuid;

use crate::{error::AppError, models::account::Account};

/// Read an account while taking its exclusive row lock.
///
/// Blocks until any competing transaction holding the row commits or rolls
/// back, within the session `lock_timeout` bound. The lock is released when
/// the enclosing transaction ends.
///
/// # Errors
///
/// - `AccountNotFound`: no such account
/// - `LockTimeout`: the row stayed locked past the configured bound
pub async fn load_for_update(
    conn: &mut PgConnection,
    account_id: Uuid,
) -> Result<Account, AppError> {
    sqlx::query_as::<_, Account>(
        r#"
        SELECT id, api_key_id, account_name, credit, created_at, updated_at
        FROM accounts
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(account_id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(AppError::AccountNotFound)
}

/// Persist an account's credit balance within the current transaction.
///
/// Only call with an account obtained from [`load_for_update`] in the same
/// transaction; the write is invisible to other units of work until commit.
pub async fn save_credit(conn: &mut PgConnection, account: &Account) -> Result<(), AppError> {
    sqlx::query(
        r#"
        UPDATE accounts
        SET credit = $1,
            updated_at = NOW()
        WHERE id = $2
        "#,
    )
    .bind(account.credit)
    .bind(account.id)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

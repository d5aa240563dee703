//! Phone number charge ledger: plain reads, locked reads, balance writes.

use sqlx::PgConnection;

use crate::{db::DbPool, error::AppError, models::phone_number::PhoneNumber};

/// Read a phone number without locking it.
///
/// Used by the read-only boundary; the returned balance may be overtaken by
/// a concurrent sale the moment it is read.
///
/// # Errors
///
/// - `PhoneNumberNotFound`: no such phone number
pub async fn load(pool: &DbPool, phone_id: i64) -> Result<PhoneNumber, AppError> {
    sqlx::query_as::<_, PhoneNumber>(
        r#"
        SELECT id, number, title, is_active, current_charge, created_at, updated_at
        FROM phone_numbers
        WHERE id = $1
        "#,
    )
    .bind(phone_id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::PhoneNumberNotFound)
}

/// List all active phone numbers, oldest first.
pub async fn list_active(pool: &DbPool) -> Result<Vec<PhoneNumber>, AppError> {
    let phones = sqlx::query_as::<_, PhoneNumber>(
        r#"
        SELECT id, number, title, is_active, current_charge, created_at, updated_at
        FROM phone_numbers
        WHERE is_active = TRUE
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(phones)
}

/// Read a phone number while taking its exclusive row lock.
///
/// Same locking semantics as the account ledger: blocks within the session
/// `lock_timeout` bound, lock held until the enclosing transaction ends.
///
/// # Errors
///
/// - `PhoneNumberNotFound`: no such phone number
/// - `LockTimeout`: the row stayed locked past the configured bound
pub async fn load_for_update(
    conn: &mut PgConnection,
    phone_id: i64,
) -> Result<PhoneNumber, AppError> {
    sqlx::query_as::<_, PhoneNumber>(
        r#"
        SELECT id, number, title, is_active, current_charge, created_at, updated_at
        FROM phone_numbers
        WHERE id = $1
        FOR UPDATE
        "#,
    )
    .bind(phone_id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or(AppError::PhoneNumberNotFound)
}

/// Persist a phone number's accrued charge within the current transaction.
///
/// Only call with a row obtained from [`load_for_update`] in the same
/// transaction.
pub async fn save_charge(conn: &mut PgConnection, phone: &PhoneNumber) -> Result<(), AppError> {
    sqlx::query(
        r#"
        UPDATE phone_numbers
        SET current_charge = $1,
            updated_at = NOW()
        WHERE id = $2
        "#,
    )
    .bind(phone.current_charge)
    .bind(phone.id)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

//! Database connection pool and migration management.
//!
//! This module provides utilities for:
//! - Creating and managing a PostgreSQL connection pool
//! - Bounding row-lock waits on every connection
//! - Running database migrations automatically

use sqlx::{Pool, Postgres};

/// Type alias for PostgreSQL connection pool.
///
/// Instead of writing `Pool<Postgres>` everywhere, we can use `DbPool`.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// A connection pool maintains multiple database connections that can be reused across HTTP requests which is much more efficient than opening a new connection for each request.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `lock_timeout_ms` - session `lock_timeout` applied to every connection
///
/// # Lock Wait Bound
///
/// Every connection handed out by the pool runs with
/// `lock_timeout = <lock_timeout_ms>`. A unit of work that blocks longer
/// than this waiting for a `FOR UPDATE` row lock is aborted by PostgreSQL
/// with SQLSTATE 55P03, which the error layer maps to a retryable
/// lock-timeout error. No operation can hang indefinitely on a row lock.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection string is invalid
/// - Cannot connect to PostgreSQL server
/// - Database authentication fails
pub async fn create_pool(database_url: &str, lock_timeout_ms: u64) -> Result<DbPool, sqlx::Error> {
    // SET takes no bind parameters; the value comes from config, not users
    let set_lock_timeout = format!("SET lock_timeout = {lock_timeout_ms}");

    sqlx::postgres::PgPoolOptions::new()
        // Limit concurrent connections
        .max_connections(5)
        .after_connect(move |conn, _meta| {
            let set_lock_timeout = set_lock_timeout.clone();
            Box::pin(async move {
                sqlx::query(&set_lock_timeout).execute(conn).await?;
                Ok(())
            })
        })
        .connect(database_url)
        .await
}

/// Run database migrations from the `migrations/` directory.
///
/// This function executes all SQL migration files in order. Migrations are tracked in a special `_sqlx_migrations` table, so each migration runs only once.
///
/// # Arguments
///
/// * `pool` - Database connection pool
///
/// # Migration Files
///
/// Migration files must be in `migrations/` directory with format:
/// - `<timestamp>_<name>.sql` (e.g., `20250101000001_create_accounts.sql`)
///
/// # Errors
///
/// Returns an error if:
/// - Migration files cannot be read
/// - SQL syntax errors in migration files
/// - Database errors during migration execution
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // The macro reads migrations at compile time from ./migrations directory
    sqlx::migrate!("./migrations").run(pool).await
}

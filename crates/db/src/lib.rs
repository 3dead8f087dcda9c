//! PostgreSQL persistence layer: pool construction, migrations, and
//! per-table repositories.

pub mod models;
pub mod repositories;

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// How long a request may wait for a pooled connection before the call is
/// treated as a transient store failure.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a connection pool from a database URL.
///
/// Every data-store call is bounded: acquiring a connection times out after
/// [`ACQUIRE_TIMEOUT`] rather than blocking a request indefinitely.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round-trip query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply any pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

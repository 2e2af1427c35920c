// web_app/api/db.rs - Database connection pool setup
//
// One global pool, initialized by the server binary and read by the
// server functions. Kept behind OnceLock so repeated init attempts
// (e.g. in tests) are harmless.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::env;
use std::sync::OnceLock;

static POOL: OnceLock<PgPool> = OnceLock::new();

/// Initialize the global database pool
pub fn init_db(pool: PgPool) {
    if POOL.set(pool).is_err() {
        tracing::warn!("Database pool already initialized");
    } else {
        tracing::info!("Global database pool initialized");
    }
}

/// Get the global database pool
pub fn get_db() -> Option<PgPool> {
    let pool = POOL.get().cloned();
    if pool.is_none() {
        tracing::warn!("Global pool is empty!");
    }
    pool
}

/// Create a PostgreSQL connection pool
///
/// Reads DATABASE_URL from the environment and creates a connection pool
/// with sensible defaults for a web application.
pub async fn create_pool() -> Result<PgPool, sqlx::Error> {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await
}

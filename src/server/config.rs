/**
 * Server Configuration
 *
 * Loads the database from environment configuration and applies schema
 * migrations.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - SQLite connection string; defaults to a local file
 *   created on first run
 * - `JWT_SECRET` - read by the token module, not here
 * - `SERVER_PORT` - read by `main`
 */

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

/// Default database location when `DATABASE_URL` is not set. `mode=rwc`
/// creates the file on first run.
const DEFAULT_DATABASE_URL: &str = "sqlite:quillpress.db?mode=rwc";

/// Connect to the database and run pending migrations.
///
/// # Errors
///
/// Connection and migration failures are fatal: the blog cannot serve
/// anything without its store, so the caller is expected to exit.
pub async fn load_database() -> Result<SqlitePool, sqlx::Error> {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    tracing::info!("Connecting to database...");
    let pool = SqlitePoolOptions::new().connect(&database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;

    tracing::info!("Database ready");
    Ok(pool)
}

/// In-memory database for unit tests. Capped at one connection because
/// every pooled connection to `sqlite::memory:` would otherwise get its
/// own empty database.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    sqlx::migrate!().run(&pool).await.expect("migrations");
    pool
}

/**
 * Server Initialization
 *
 * Assembles the application from a database pool. Kept separate from
 * configuration loading so tests can build the full router over an
 * in-memory database.
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::routes::router::create_router;
use crate::server::state::AppState;

/// Create the Axum application over the given pool.
pub fn create_app(pool: SqlitePool) -> Router {
    let app_state = AppState { db: pool };
    create_router(app_state)
}

/**
 * Application State
 *
 * The central state container for the Axum application. The blog keeps no
 * cross-request mutable state in process; the only shared resource is the
 * database pool, which is cheap to clone.
 *
 * The `FromRef` implementation lets handlers extract `State<SqlitePool>`
 * directly instead of taking the whole `AppState`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: SqlitePool,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

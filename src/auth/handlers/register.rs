/**
 * Registration Handler
 *
 * POST /register creates a user from a JSON `{username, password}` body.
 *
 * # Registration Process
 *
 * 1. Hash the password with bcrypt (fixed cost)
 * 2. Insert the record; the store's UNIQUE constraint decides duplicates
 * 3. Return 201 with the stored record
 *
 * # Errors
 *
 * A duplicate username is a 409, anything else a 500 — never both for the
 * same request: the handler returns one `Result` and the error boundary
 * writes exactly one response.
 */

use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::auth::users::create_user;
use crate::error::AppError;

/// Create a new user.
///
/// # Errors
///
/// * `409 Conflict` - username already registered
/// * `500 Internal Server Error` - hash or database failure
pub async fn register(
    State(pool): State<SqlitePool>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    tracing::info!("Registration request for: {}", request.username);

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = create_user(&pool, &request.username, &password_hash).await?;

    tracing::info!("User created: {}", user.username);

    // The registration response intentionally echoes the stored record,
    // hash included.
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created.".to_string(),
            user,
        }),
    ))
}

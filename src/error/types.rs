/**
 * Application Error Types
 *
 * This module defines the error taxonomy for the whole request surface.
 * Every handler returns `Result<_, AppError>`, and the `IntoResponse`
 * implementation in `conversion.rs` maps each variant to exactly one HTTP
 * response, so a request can never finish without a response or receive
 * two of them.
 *
 * # Variants
 *
 * - `Unauthorized` - missing or unverifiable session token
 * - `InvalidCredentials` - login failure; deliberately identical for
 *   unknown usernames and wrong passwords
 * - `DuplicateUser` - unique-constraint violation on registration
 * - `NotFound` - post lookup by id came back empty
 * - `Database` / `PasswordHash` / `Token` - internal failures, all
 *   surfaced as 500
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Error type shared by all request handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid session token on a gated route.
    #[error("unauthorized")]
    Unauthorized,

    /// Login failed. Unknown username and wrong password collapse into
    /// this one variant so the response cannot leak which usernames exist.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration hit the unique-username constraint.
    #[error("username already taken")]
    DuplicateUser,

    /// A record looked up by id does not exist.
    #[error("record not found")]
    NotFound,

    /// Database failure other than a unique violation.
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// bcrypt hashing or verification failure.
    #[error("password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Token minting failure. Verification failures on the gate map to
    /// `Unauthorized` instead.
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::DuplicateUser => StatusCode::CONFLICT,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::PasswordHash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Client-facing message for the JSON error body.
    ///
    /// Internal failures all collapse into one opaque message; the detail
    /// goes to the log, not to the client.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Unauthorized => "Unauthorized.",
            Self::InvalidCredentials => "Invalid credentials.",
            Self::DuplicateUser => "User already in use.",
            Self::NotFound => "Not found.",
            Self::Database(_) | Self::PasswordHash(_) | Self::Token(_) => {
                "Internal Server error."
            }
        }
    }
}

/// Database errors are inspected for unique-constraint violations so that
/// duplicate registration is reported distinctly from other store failures.
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return Self::DuplicateUser;
            }
        }
        Self::Database(err)
    }
}

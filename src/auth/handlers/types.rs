/**
 * Authentication Handler Types
 *
 * Request and response types shared by the login and registration
 * handlers.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Login form body (urlencoded, from the admin login page).
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginForm {
    pub username: String,
    /// Verified against the stored bcrypt hash, never stored itself.
    pub password: String,
}

/// Registration request body (JSON).
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// Registration response: confirmation message plus the stored record.
///
/// The record carries the bcrypt hash; the response echoes what was
/// stored, verbatim.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: User,
}

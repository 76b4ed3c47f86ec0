/**
 * Session Tokens
 *
 * JWT minting and verification for the session cookie. Tokens are
 * stateless: nothing is persisted server-side, so validity is decided
 * entirely by signature verification against the server-held secret.
 * There is no revocation list; logout only clears the client cookie.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Token lifetime in seconds (30 days).
const TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims carried by the session cookie.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Get the signing secret from the environment.
fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|err| {
        tracing::warn!("Missing JWT_SECRET ({err}), using development fallback");
        "quillpress-dev-secret-change-in-production".to_string()
    })
}

/// Mint a signed session token embedding the user id.
pub fn create_token(user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_secs();

    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let secret = jwt_secret();
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

/// Verify a token's signature and expiry, returning its claims.
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let secret = jwt_secret();
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )?;
    Ok(token_data.claims)
}

/// Extract the user id from a verified token.
pub fn user_id_from_token(token: &str) -> Result<Uuid, crate::error::AppError> {
    let claims = verify_token(token).map_err(|_| crate::error::AppError::Unauthorized)?;
    Uuid::parse_str(&claims.sub).map_err(|_| crate::error::AppError::Unauthorized)
}

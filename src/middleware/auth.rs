/**
 * Authentication Middleware
 *
 * The auth gate protecting admin routes. It extracts the session token
 * from the `token` cookie, verifies its signature, and attaches the user
 * id to request extensions for handlers to read through the `AuthUser`
 * extractor.
 *
 * The gate is verify-only: a missing or unverifiable token is rejected
 * with 401 before the handler runs, and the database is never touched.
 * There is no role model beyond authenticated-or-not.
 */

use axum::{
    extract::{FromRequestParts, Request},
    http::{header::COOKIE, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::tokens::user_id_from_token;
use crate::error::AppError;

/// Name of the session cookie.
pub const TOKEN_COOKIE: &str = "token";

/// Identity attached to the request by the auth gate.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Auth gate for protected routes.
///
/// 1. Extract the token from the `token` cookie
/// 2. Verify signature and expiry
/// 3. Attach `AuthenticatedUser` to request extensions
///
/// Returns 401 Unauthorized if the cookie is missing or the token does
/// not verify; the wrapped handler never runs in that case.
pub async fn auth_gate(mut request: Request, next: Next) -> Result<Response, AppError> {
    let token = token_cookie(request.headers()).ok_or_else(|| {
        tracing::debug!("No session cookie on gated route");
        AppError::Unauthorized
    })?;

    let user_id = user_id_from_token(&token)?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Read the session token out of the `Cookie` header, if present.
pub fn token_cookie(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        pair.trim()
            .strip_prefix(TOKEN_COOKIE)?
            .strip_prefix('=')
            .map(str::to_string)
    })
}

/// `Set-Cookie` value establishing a session.
pub fn session_cookie(token: &str) -> String {
    format!("{TOKEN_COOKIE}={token}; HttpOnly; Path=/")
}

/// `Set-Cookie` value clearing the session on logout.
pub fn clear_session_cookie() -> String {
    format!("{TOKEN_COOKIE}=; HttpOnly; Path=/; Max-Age=0")
}

/// Extractor handing the authenticated identity to gated handlers.
///
/// Only valid behind `auth_gate`; elsewhere the extension is absent and
/// extraction rejects with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser missing from request extensions");
                AppError::Unauthorized
            })
    }
}

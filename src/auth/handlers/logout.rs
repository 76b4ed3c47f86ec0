/**
 * Logout Handler
 *
 * GET /logout clears the session cookie and redirects home. Sessions are
 * stateless signed tokens, so there is nothing server-side to invalidate;
 * a copied token remains valid until it expires.
 */

use axum::{
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Redirect},
};

use crate::middleware::auth::clear_session_cookie;

/// Clear the `token` cookie and redirect to the home page.
pub async fn logout() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Redirect::to("/"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_logout_clears_cookie_and_redirects() {
        let response = logout().await.into_response();

        assert!(response.status().is_redirection());
        let cookie = response
            .headers()
            .get(SET_COOKIE)
            .expect("clearing cookie must be set")
            .to_str()
            .unwrap();
        assert!(cookie.starts_with("token=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}

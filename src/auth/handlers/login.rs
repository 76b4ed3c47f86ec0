/**
 * Login Handler
 *
 * GET /admin renders the login page; POST /admin authenticates.
 *
 * # Authentication Process
 *
 * 1. Look up the user by exact username
 * 2. Verify the password against the stored bcrypt hash
 * 3. Mint a signed session token
 * 4. Set it as the HTTP-only `token` cookie and redirect to the dashboard
 *
 * # Security
 *
 * Unknown username and wrong password return the same 401 body, so the
 * response cannot be used to enumerate accounts. Passwords are never
 * logged.
 */

use axum::{
    extract::{Form, State},
    http::header::SET_COOKIE,
    response::{AppendHeaders, Html, IntoResponse, Redirect},
};
use bcrypt::verify;
use sqlx::SqlitePool;

use crate::auth::handlers::types::LoginForm;
use crate::auth::tokens::create_token;
use crate::auth::users::get_user_by_username;
use crate::error::AppError;
use crate::middleware::auth::session_cookie;
use crate::pages;

/// Render the admin login page.
pub async fn login_page() -> Html<String> {
    Html(pages::login())
}

/// Authenticate and establish a session.
///
/// # Errors
///
/// * `401 Unauthorized` - unknown username or wrong password, with an
///   identical body in both cases
/// * `500 Internal Server Error` - database, hash, or token failure
pub async fn login(
    State(pool): State<SqlitePool>,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Login attempt for: {}", form.username);

    let user = get_user_by_username(&pool, &form.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed, unknown username: {}", form.username);
            AppError::InvalidCredentials
        })?;

    let valid = verify(&form.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Login failed, wrong password for: {}", form.username);
        return Err(AppError::InvalidCredentials);
    }

    let token = create_token(user.id)?;
    tracing::info!("User logged in: {}", user.username);

    Ok((
        AppendHeaders([(SET_COOKIE, session_cookie(&token))]),
        Redirect::to("/dashboard"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::users::create_user;
    use crate::server::config::test_pool;
    use axum::response::Response;

    async fn login_response(pool: &SqlitePool, username: &str, password: &str) -> Response {
        let form = LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        };
        match login(State(pool.clone()), Form(form)).await {
            Ok(ok) => ok.into_response(),
            Err(err) => err.into_response(),
        }
    }

    #[tokio::test]
    async fn test_login_success_sets_cookie_and_redirects() {
        let pool = test_pool().await;
        let hash = bcrypt::hash("hunter2secret", bcrypt::DEFAULT_COST).unwrap();
        create_user(&pool, "margot", &hash).await.unwrap();

        let response = login_response(&pool, "margot", "hunter2secret").await;

        assert!(response.status().is_redirection());
        let cookie = response
            .headers()
            .get(SET_COOKIE)
            .expect("session cookie must be set")
            .to_str()
            .unwrap();
        assert!(cookie.starts_with("token="));
        assert!(cookie.contains("HttpOnly"));
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_are_identical() {
        let pool = test_pool().await;
        let hash = bcrypt::hash("hunter2secret", bcrypt::DEFAULT_COST).unwrap();
        create_user(&pool, "margot", &hash).await.unwrap();

        let wrong_password = login_response(&pool, "margot", "incorrect").await;
        let unknown_user = login_response(&pool, "nobody", "incorrect").await;

        assert_eq!(wrong_password.status().as_u16(), 401);
        assert_eq!(unknown_user.status().as_u16(), 401);
    }
}

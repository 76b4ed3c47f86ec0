//! Shared integration-test fixtures
//!
//! Builds the full application over an in-memory SQLite database and
//! provides helpers for registering a user and obtaining a session
//! cookie through the real login flow.

#![allow(dead_code)]

use axum::http::{header::SET_COOKIE, HeaderValue, StatusCode};
use axum_test::TestServer;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// A running test application plus direct access to its database.
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
}

/// Spin up the app over a fresh in-memory database.
///
/// The pool is capped at one connection: each pooled connection to
/// `sqlite::memory:` would otherwise see its own empty database.
pub async fn spawn_app() -> TestApp {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database");
    sqlx::migrate!().run(&pool).await.expect("migrations");

    let app = quillpress::server::init::create_app(pool.clone());
    let server = TestServer::new(app).expect("test server");

    TestApp { server, pool }
}

/// Register a user through the real endpoint.
pub async fn register_user(server: &TestServer, username: &str, password: &str) {
    let response = server
        .post("/register")
        .json(&serde_json::json!({
            "username": username,
            "password": password,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
}

/// Log in and return the session cookie pair (`token=...`) ready to be
/// sent back as a `Cookie` header.
pub async fn login_cookie(server: &TestServer, username: &str, password: &str) -> HeaderValue {
    let response = server
        .post("/admin")
        .form(&serde_json::json!({
            "username": username,
            "password": password,
        }))
        .await;

    assert!(
        response.status_code().is_redirection(),
        "login should redirect, got {}",
        response.status_code()
    );

    let set_cookie = response
        .headers()
        .get(SET_COOKIE)
        .expect("login must set the session cookie")
        .to_str()
        .expect("cookie is ascii")
        .to_string();

    let pair = set_cookie.split(';').next().expect("cookie pair");
    assert!(pair.starts_with("token="));
    HeaderValue::from_str(pair).expect("header value")
}

/// Register and log in a fresh admin, returning the session cookie.
pub async fn authenticated_cookie(server: &TestServer) -> HeaderValue {
    register_user(server, "editor", "correct-horse-battery").await;
    login_cookie(server, "editor", "correct-horse-battery").await
}

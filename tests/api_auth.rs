//! Authentication flow integration tests
//!
//! Drives registration, login, the auth gate, and logout through the full
//! router.

mod common;

use axum::http::{header::COOKIE, HeaderValue, StatusCode};
use common::{authenticated_cookie, login_cookie, register_user, spawn_app};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_register_then_login_yields_working_session() {
    let app = spawn_app().await;

    register_user(&app.server, "margot", "correct-horse-battery").await;
    let cookie = login_cookie(&app.server, "margot", "correct-horse-battery").await;

    // The cookie from a real login passes the auth gate.
    let response = app
        .server
        .get("/dashboard")
        .add_header(COOKIE, cookie)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_register_response_includes_stored_record() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/register")
        .json(&serde_json::json!({
            "username": "margot",
            "password": "correct-horse-battery",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "User created.");
    assert_eq!(body["user"]["username"], "margot");
    // The stored record comes back verbatim, bcrypt hash included.
    let hash = body["user"]["password_hash"].as_str().unwrap();
    assert!(hash.starts_with("$2"));
    assert_ne!(hash, "correct-horse-battery");
}

#[tokio::test]
async fn test_duplicate_registration_is_one_conflict() {
    let app = spawn_app().await;

    register_user(&app.server, "margot", "correct-horse-battery").await;

    let response = app
        .server
        .post("/register")
        .json(&serde_json::json!({
            "username": "margot",
            "password": "another-password",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: serde_json::Value = response.json();
    assert_eq!(body, serde_json::json!({ "message": "User already in use." }));
}

#[tokio::test]
async fn test_bad_credentials_are_indistinguishable() {
    let app = spawn_app().await;

    register_user(&app.server, "margot", "correct-horse-battery").await;

    let wrong_password = app
        .server
        .post("/admin")
        .form(&serde_json::json!({
            "username": "margot",
            "password": "incorrect",
        }))
        .await;
    let unknown_user = app
        .server
        .post("/admin")
        .form(&serde_json::json!({
            "username": "nobody",
            "password": "incorrect",
        }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status_code(), StatusCode::UNAUTHORIZED);
    // Identical bodies: no username enumeration through the error.
    assert_eq!(wrong_password.text(), unknown_user.text());
    let body: serde_json::Value = unknown_user.json();
    assert_eq!(body, serde_json::json!({ "message": "Invalid credentials." }));
}

#[tokio::test]
async fn test_gated_routes_reject_missing_cookie() {
    let app = spawn_app().await;

    for path in ["/dashboard", "/add-post", "/edit-post/not-even-a-uuid"] {
        let response = app.server.get(path).await;
        assert_eq!(
            response.status_code(),
            StatusCode::UNAUTHORIZED,
            "expected 401 for {path}"
        );
        let body: serde_json::Value = response.json();
        assert_eq!(body, serde_json::json!({ "message": "Unauthorized." }));
    }

    // The gate rejected before any lookups: the store is still empty and
    // no user was ever needed.
    let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(users, 0);
}

#[tokio::test]
async fn test_gated_routes_reject_garbage_token() {
    let app = spawn_app().await;

    let response = app
        .server
        .get("/dashboard")
        .add_header(COOKIE, HeaderValue::from_static("token=not.a.real.token"))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_page_is_public() {
    let app = spawn_app().await;

    let response = app.server.get("/admin").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("<form action=\"/admin\""));
}

#[tokio::test]
async fn test_logout_clears_cookie_and_redirects_home() {
    let app = spawn_app().await;
    let cookie = authenticated_cookie(&app.server).await;

    let response = app.server.get("/logout").add_header(COOKIE, cookie).await;

    assert!(response.status_code().is_redirection());
    let set_cookie = response
        .headers()
        .get(axum::http::header::SET_COOKIE)
        .expect("logout must clear the cookie")
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("token=;"));
    assert!(set_cookie.contains("Max-Age=0"));
}

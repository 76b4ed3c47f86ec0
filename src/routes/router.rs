/**
 * Router Configuration
 *
 * The full HTTP surface of the blog, assembled from two subrouters:
 *
 * # Gated (auth-gate layer, 401 without a valid `token` cookie)
 *
 * - `GET  /dashboard` - list all posts
 * - `GET  /add-post` - render the post form
 * - `POST /add-post` - create a post
 * - `GET  /edit-post/{id}` - render the edit form
 * - `PUT  /edit-post/{id}` - update a post
 * - `DELETE /delete-post/{id}` - delete a post
 *
 * # Public
 *
 * - `GET  /` - paginated listing
 * - `GET  /admin` + `POST /admin` - login page and login
 * - `POST /register` - create a user
 * - `GET  /logout` - clear the session cookie
 * - `GET  /post/{id}` - single post
 * - `POST /search` - substring search
 * - `GET  /about`, `GET /contact` - static pages
 * - `/static/...` - assets via ServeDir
 *
 * The edit and delete routes additionally accept POST so plain HTML forms
 * can drive them without method-override tricks; the PUT/DELETE bindings
 * remain the canonical surface.
 */

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::auth::{login, login_page, logout, register};
use crate::middleware::auth::auth_gate;
use crate::posts::admin::{
    add_post, add_post_page, dashboard, delete_post, edit_post, edit_post_page,
};
use crate::posts::public::{about, contact, home, search, view_post};
use crate::server::state::AppState;

/// Create the router with all routes configured.
pub fn create_router(app_state: AppState) -> Router {
    // Gated routes first; the layer only wraps what is already in this
    // subrouter, so login and registration stay outside it.
    let admin = Router::new()
        .route("/dashboard", get(dashboard))
        .route("/add-post", get(add_post_page).post(add_post))
        .route(
            "/edit-post/{id}",
            get(edit_post_page).put(edit_post).post(edit_post),
        )
        .route("/delete-post/{id}", delete(delete_post).post(delete_post))
        .route_layer(middleware::from_fn(auth_gate));

    let public = Router::new()
        .route("/", get(home))
        .route("/admin", get(login_page).post(login))
        .route("/register", post(register))
        .route("/logout", get(logout))
        .route("/post/{id}", get(view_post))
        .route("/search", post(search))
        .route("/about", get(about))
        .route("/contact", get(contact));

    Router::new()
        .merge(admin)
        .merge(public)
        .nest_service("/static", ServeDir::new("public"))
        .fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") })
        .with_state(app_state)
}

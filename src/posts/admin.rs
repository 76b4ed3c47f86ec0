/**
 * Admin Post Handlers
 *
 * The gated content-management routes: dashboard listing, add, edit, and
 * delete. All of them sit behind the auth gate; the `AuthUser` extractor
 * provides the identity attached by the middleware. Mutations redirect
 * back into the admin flow rather than rendering a page.
 */

use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Redirect},
};
use serde::Deserialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::pages;
use crate::posts::db;

/// Form body for creating and editing posts.
#[derive(Debug, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub body: String,
}

/// GET /dashboard - list every post.
pub async fn dashboard(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
) -> Result<Html<String>, AppError> {
    tracing::debug!(user_id = %user.user_id, "rendering dashboard");
    let posts = db::list_posts(&pool).await?;
    Ok(Html(pages::dashboard(&posts)))
}

/// GET /add-post - render the empty post form.
pub async fn add_post_page(AuthUser(_): AuthUser) -> Html<String> {
    Html(pages::add_post())
}

/// POST /add-post - create a post and return to the dashboard.
pub async fn add_post(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Form(form): Form<PostForm>,
) -> Result<impl IntoResponse, AppError> {
    let post = db::create_post(&pool, &form.title, &form.body).await?;
    tracing::info!(user_id = %user.user_id, post_id = %post.id, "post created");
    Ok(Redirect::to("/dashboard"))
}

/// GET /edit-post/{id} - render the edit form.
///
/// # Errors
///
/// * `404 Not Found` - no post with this id
pub async fn edit_post_page(
    State(pool): State<SqlitePool>,
    AuthUser(_): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let post = db::get_post(&pool, id).await?.ok_or(AppError::NotFound)?;
    Ok(Html(pages::edit_post(&post)))
}

/// PUT /edit-post/{id} - update title and body, refresh `updated_at`,
/// and redirect back to the edit form.
pub async fn edit_post(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Form(form): Form<PostForm>,
) -> Result<impl IntoResponse, AppError> {
    db::update_post(&pool, id, &form.title, &form.body).await?;
    tracing::info!(user_id = %user.user_id, post_id = %id, "post updated");
    Ok(Redirect::to(&format!("/edit-post/{id}")))
}

/// DELETE /delete-post/{id} - delete and return to the dashboard.
///
/// Deleting an id that does not exist is a no-op, not an error.
pub async fn delete_post(
    State(pool): State<SqlitePool>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    db::delete_post(&pool, id).await?;
    tracing::info!(user_id = %user.user_id, post_id = %id, "post deleted");
    Ok(Redirect::to("/dashboard"))
}

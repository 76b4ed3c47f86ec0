/**
 * Public Handlers
 *
 * The unauthenticated reading surface: paginated home listing, single
 * post view, free-text search, and the static about/contact pages.
 */

use std::collections::HashMap;

use axum::{
    extract::{Form, Path, Query, State},
    response::Html,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::AppError;
use crate::pages;
use crate::posts::db;

/// Posts per home page.
const PER_PAGE: u64 = 6;

/// Search form body.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Page number for the listing after the given one, if any posts remain.
///
/// `page` is unvalidated client input; the increment saturates rather
/// than overflowing.
fn next_page(page: u64, total: u64, per_page: u64) -> Option<u64> {
    let last_page = total.div_ceil(per_page);
    let next = page.saturating_add(1);
    (next <= last_page && next > page).then_some(next)
}

/// GET / - home listing, newest first, six posts per page.
///
/// The `page` query parameter defaults to 1; non-numeric or zero values
/// fall back to 1 rather than rejecting the request.
pub async fn home(
    State(pool): State<SqlitePool>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let page = params
        .get("page")
        .and_then(|p| p.parse::<u64>().ok())
        .unwrap_or(1)
        .max(1);

    let posts = db::list_posts_page(&pool, page, PER_PAGE).await?;
    let total = db::count_posts(&pool).await?;
    let next = next_page(page, total, PER_PAGE);

    Ok(Html(pages::home(&posts, next)))
}

/// GET /post/{id} - single post view.
///
/// # Errors
///
/// * `404 Not Found` - no post with this id
pub async fn view_post(
    State(pool): State<SqlitePool>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let post = db::get_post(&pool, id).await?.ok_or(AppError::NotFound)?;
    Ok(Html(pages::post(&post)))
}

/// POST /search - substring search over title and body.
///
/// The term is stripped to `[a-zA-Z0-9]` before matching; a term of only
/// special characters therefore matches every post. The full match set is
/// returned unpaginated.
pub async fn search(
    State(pool): State<SqlitePool>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>, AppError> {
    let term = db::sanitize_search_term(&form.search_term);
    tracing::debug!(%term, "search");
    let posts = db::search_posts(&pool, &term).await?;
    Ok(Html(pages::search_results(&posts)))
}

/// GET /about
pub async fn about() -> Html<String> {
    Html(pages::about())
}

/// GET /contact
pub async fn contact() -> Html<String> {
    Html(pages::contact())
}

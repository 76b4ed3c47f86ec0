/**
 * Post Model and Database Operations
 *
 * Persisted post records and the queries behind every content route:
 * CRUD for the admin panel, page-windowed listing for the home page, and
 * substring search. Each operation is a single statement; nothing here is
 * transactional and nothing is retried.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// Post record as stored. No author linkage exists.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert a new post. Both timestamps start at the current time.
pub async fn create_post(
    pool: &SqlitePool,
    title: &str,
    body: &str,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, title, body, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, body, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(body)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Fetch a post by id.
pub async fn get_post(pool: &SqlitePool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, body, created_at, updated_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Fetch every post, in no particular order. Used by the admin dashboard.
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, body, created_at, updated_at
        FROM posts
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Fetch one page of posts, newest first.
///
/// `page` is 1-based; the window is `(page - 1) * per_page .. page * per_page`.
pub async fn list_posts_page(
    pool: &SqlitePool,
    page: u64,
    per_page: u64,
) -> Result<Vec<Post>, sqlx::Error> {
    // `page` comes straight from the query string; saturate instead of
    // overflowing, and keep the OFFSET non-negative after the i64 cast.
    let offset = page.saturating_sub(1).saturating_mul(per_page);
    let offset = i64::try_from(offset).unwrap_or(i64::MAX);

    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, body, created_at, updated_at
        FROM posts
        ORDER BY created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(per_page as i64)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// Total number of posts, for pagination.
pub async fn count_posts(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM posts"#)
        .fetch_one(pool)
        .await?;
    Ok(count as u64)
}

/// Update a post's title and body, refreshing `updated_at` to now.
///
/// Updating a missing id is a no-op, matching delete semantics.
pub async fn update_post(
    pool: &SqlitePool,
    id: Uuid,
    title: &str,
    body: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE posts
        SET title = $1, body = $2, updated_at = $3
        WHERE id = $4
        "#,
    )
    .bind(title)
    .bind(body)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a post by id. Deleting a missing id is an idempotent no-op.
pub async fn delete_post(pool: &SqlitePool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(r#"DELETE FROM posts WHERE id = $1"#)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Strip every character outside `[a-zA-Z0-9]` from a search term.
///
/// Inherited sanitation rule: hyphenated or accented terms lose those
/// characters, and a term of only special characters becomes empty, which
/// the LIKE pattern below then treats as match-everything.
pub fn sanitize_search_term(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Case-insensitive substring search over title OR body.
///
/// The term is expected to be pre-sanitized. The full match set comes
/// back: no pagination, no limit.
pub async fn search_posts(pool: &SqlitePool, term: &str) -> Result<Vec<Post>, sqlx::Error> {
    let pattern = format!("%{term}%");

    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, body, created_at, updated_at
        FROM posts
        WHERE title LIKE $1 OR body LIKE $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(&pattern)
    .fetch_all(pool)
    .await
}

/**
 * Page Rendering
 *
 * Server-side HTML for every rendered route. Pages are plain string
 * templates sharing one layout; anything interpolated from user content
 * goes through `html_escape` first.
 */

use crate::posts::db::Post;

/// Shared layout wrapping every page body.
fn layout(title: &str, content: &str) -> String {
    let title = html_escape::encode_text(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/css/style.css">
</head>
<body>
<header>
<nav>
<a href="/">Home</a>
<a href="/about">About</a>
<a href="/contact">Contact</a>
<a href="/admin">Admin</a>
</nav>
<form action="/search" method="post">
<input type="text" name="searchTerm" placeholder="Search...">
</form>
</header>
<main>
{content}
</main>
</body>
</html>
"#
    )
}

fn post_summary(post: &Post) -> String {
    format!(
        r#"<article>
<h2><a href="/post/{id}">{title}</a></h2>
<time datetime="{created}">{created_short}</time>
</article>"#,
        id = post.id,
        title = html_escape::encode_text(&post.title),
        created = post.created_at.to_rfc3339(),
        created_short = post.created_at.format("%-d %B %Y"),
    )
}

/// Home page: one page of posts plus an optional link to the next one.
pub fn home(posts: &[Post], next_page: Option<u64>) -> String {
    let mut content = String::from("<h1>Quillpress</h1>\n");
    for post in posts {
        content.push_str(&post_summary(post));
        content.push('\n');
    }
    if let Some(next) = next_page {
        content.push_str(&format!(
            r#"<a class="pagination" href="/?page={next}">&lt; View older posts</a>"#
        ));
    }
    layout("Quillpress", &content)
}

/// Single post view. The post title doubles as the page title.
pub fn post(post: &Post) -> String {
    let content = format!(
        "<h1>{title}</h1>\n<div>{body}</div>",
        title = html_escape::encode_text(&post.title),
        body = html_escape::encode_text(&post.body),
    );
    layout(&post.title, &content)
}

/// Search results page.
pub fn search_results(posts: &[Post]) -> String {
    let mut content = String::from("<h1>Search results</h1>\n");
    if posts.is_empty() {
        content.push_str("<p>No posts matched.</p>");
    }
    for post in posts {
        content.push_str(&post_summary(post));
        content.push('\n');
    }
    layout("Search", &content)
}

pub fn about() -> String {
    layout(
        "About",
        "<h1>About</h1>\n<p>A small blog, server-rendered the old way.</p>",
    )
}

pub fn contact() -> String {
    layout(
        "Contact",
        "<h1>Contact</h1>\n<p>Write to the editor: editor@quillpress.example</p>",
    )
}

/// Admin login form.
pub fn login() -> String {
    layout(
        "Admin",
        r#"<h1>Admin</h1>
<form action="/admin" method="post">
<label>Username <input type="text" name="username" required></label>
<label>Password <input type="password" name="password" required></label>
<button type="submit">Sign in</button>
</form>"#,
    )
}

/// Admin dashboard: every post with edit and delete controls.
pub fn dashboard(posts: &[Post]) -> String {
    let mut rows = String::new();
    for post in posts {
        rows.push_str(&format!(
            r#"<tr>
<td>{title}</td>
<td><a href="/edit-post/{id}">Edit</a></td>
<td><form action="/delete-post/{id}" method="post"><button type="submit">Delete</button></form></td>
</tr>"#,
            title = html_escape::encode_text(&post.title),
            id = post.id,
        ));
    }
    let content = format!(
        r#"<h1>Dashboard</h1>
<p><a href="/add-post">+ Add post</a> | <a href="/logout">Log out</a></p>
<table class="admin-posts">
<tr><th>Title</th><th></th><th></th></tr>
{rows}
</table>"#
    );
    layout("Admin dashboard", &content)
}

/// Empty form for a new post.
pub fn add_post() -> String {
    layout(
        "Add post",
        r#"<h1>Add post</h1>
<form action="/add-post" method="post">
<label>Title <input type="text" name="title" required></label>
<label>Body <textarea name="body" rows="12"></textarea></label>
<button type="submit">Create</button>
</form>"#,
    )
}

/// Pre-filled edit form for an existing post.
pub fn edit_post(post: &Post) -> String {
    let content = format!(
        r#"<h1>Edit post: {title}</h1>
<form action="/edit-post/{id}" method="post">
<label>Title <input type="text" name="title" value="{title_attr}" required></label>
<label>Body <textarea name="body" rows="12">{body}</textarea></label>
<button type="submit">Save</button>
</form>
<p><a href="/dashboard">Back to dashboard</a></p>"#,
        id = post.id,
        title = html_escape::encode_text(&post.title),
        title_attr = html_escape::encode_double_quoted_attribute(&post.title),
        body = html_escape::encode_text(&post.body),
    );
    layout(&format!("Edit post: {}", post.title), &content)
}

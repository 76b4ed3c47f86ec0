/**
 * Quillpress
 *
 * A small server-rendered blog with an admin panel: cookie + signed-token
 * authentication, post CRUD, substring search, and fixed-size pagination
 * over a SQLite store.
 */

pub mod auth;
pub mod error;
pub mod middleware;
pub mod pages;
pub mod posts;
pub mod routes;
pub mod server;

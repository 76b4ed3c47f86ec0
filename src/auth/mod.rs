pub mod handlers;
pub mod tokens;
pub mod users;

pub use handlers::{login, login_page, logout, register};

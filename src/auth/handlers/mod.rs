pub mod login;
pub mod logout;
pub mod register;
pub mod types;

pub use login::{login, login_page};
pub use logout::logout;
pub use register::register;

pub mod conversion;
pub mod types;

pub use types::AppError;

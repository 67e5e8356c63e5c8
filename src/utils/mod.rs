pub mod error;
pub mod logging;
pub mod response;
pub mod time;

pub use error::AppError;
pub use response::ErrorResponse;

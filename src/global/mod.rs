pub mod fallback;
pub mod middleware;

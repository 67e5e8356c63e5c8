//! Router-level fallbacks.
//!
//! Requests no handler accepts are reported as internal errors so the client
//! always gets the JSON error body.

use axum::http::{Method, Uri};

use crate::utils::error::AppError;

/// 경로는 있으나 메서드가 맞지 않는 요청
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::internal_error(format!("Request method '{}' is not supported", method))
}

/// 매칭되는 경로가 없는 요청
pub async fn not_found(method: Method, uri: Uri) -> AppError {
    AppError::internal_error(format!("No handler found for {} {}", method, uri.path()))
}

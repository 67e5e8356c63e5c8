use axum::http::StatusCode;
use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

use super::time;

/// 에러 응답 구조체
///
/// 형식:
/// ```json
/// {
///   "error": "Validation failed",
///   "message": "{message=Message cannot be empty}",
///   "status": 400,
///   "timestamp": "2025-01-01 12:00:00"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// 에러 분류
    #[schema(example = "Validation failed")]
    pub error: String,

    /// 상세 메시지
    #[schema(example = "{message=Message cannot be empty}")]
    pub message: String,

    /// HTTP 상태 코드
    #[schema(example = 400)]
    pub status: u16,

    /// 에러 발생 시각
    #[serde(serialize_with = "time::serialize")]
    #[schema(value_type = String, example = "2025-01-01 12:00:00")]
    pub timestamp: NaiveDateTime,
}

impl ErrorResponse {
    /// 에러 응답 생성 (생성 시점의 시각을 기록)
    pub fn new(error: impl Into<String>, message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: status.as_u16(),
            timestamp: time::now(),
        }
    }
}

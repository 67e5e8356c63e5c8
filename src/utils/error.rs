use std::any::Any;
use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};
use validator::{ValidationError, ValidationErrors};

use super::response::ErrorResponse;

pub const VALIDATION_FAILED: &str = "Validation failed";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// 애플리케이션 전역 에러 타입
///
/// 입력 검증 실패는 `Validation`, 그 외 모든 장애는 `Internal`로 분류됩니다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {}", format_field_errors(.0))]
    Validation(ValidationErrors),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// 에러 분류 반환
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Validation(_) => VALIDATION_FAILED,
            AppError::Internal(_) => INTERNAL_SERVER_ERROR,
        }
    }

    /// 에러 메시지 반환
    pub fn message(&self) -> String {
        match self {
            AppError::Validation(errors) => format_field_errors(errors),
            AppError::Internal(msg) => msg.clone(),
        }
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn internal_error(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        match &self {
            AppError::Validation(_) => warn!(status = status.as_u16(), "Validation failed: {}", message),
            AppError::Internal(_) => error!(status = status.as_u16(), "Internal Server Error: {}", message),
        }

        let error_response = ErrorResponse::new(self.category(), message, status);

        (status, Json(error_response)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

/// 본문 파싱 실패는 필드 검증 실패가 아니므로 내부 에러로 분류
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Internal(rejection.body_text())
    }
}

/// 필드별 검증 실패를 `{field=reason, ...}` 형태로 직렬화
///
/// 필드는 이름순으로 정렬되며, 한 필드에 여러 규칙이 실패한 경우
/// 먼저 기록된 사유만 사용합니다.
pub fn format_field_errors(errors: &ValidationErrors) -> String {
    let fields: BTreeMap<String, String> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, violations)| {
            violations
                .first()
                .map(|violation| (field.to_string(), reason(violation)))
        })
        .collect();

    let body = fields
        .iter()
        .map(|(field, reason)| format!("{}={}", field, reason))
        .collect::<Vec<_>>()
        .join(", ");

    format!("{{{}}}", body)
}

fn reason(violation: &ValidationError) -> String {
    violation
        .message
        .as_ref()
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| violation.code.to_string())
}

/// `CatchPanicLayer`용 패닉 핸들러
///
/// 패닉 페이로드가 문자열이면 그대로 메시지로 사용하고, 아니면 빈 메시지를 돌려줍니다.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else {
        String::new()
    };

    AppError::Internal(message).into_response()
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use super::validator::validate_message;
use crate::utils::time;

/// Echo 요청 DTO
///
/// `message`가 없거나 `null`이면 `None`으로 역직렬화되어 검증 단계에서 거부됩니다.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct EchoRequest {
    /// 에코할 메시지 (공백 불가, 최대 1000자)
    #[serde(default)]
    #[schema(example = "Hello, World!", max_length = 1000)]
    pub message: Option<String>,
}

impl Validate for EchoRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(violations) = validate_message(self.message.as_deref()) {
            for violation in violations {
                errors.add("message", violation);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl EchoRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// 검증 후 메시지를 그대로 반환
    pub fn into_validated(self) -> Result<String, ValidationErrors> {
        self.validate()?;
        Ok(self.message.unwrap_or_default())
    }
}

/// Echo 응답 DTO
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EchoResponse {
    /// `"Echo: "` 접두사가 붙은 메시지
    #[schema(example = "Echo: Hello, World!")]
    pub echo: String,

    /// 응답 생성 시각
    #[serde(serialize_with = "time::serialize")]
    #[schema(value_type = String, example = "2025-01-01 12:00:00")]
    pub timestamp: NaiveDateTime,
}

impl EchoResponse {
    /// 생성 시점의 시각으로 응답 생성
    pub fn new(echo: impl Into<String>) -> Self {
        Self::with_timestamp(echo, time::now())
    }

    pub fn with_timestamp(echo: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            echo: echo.into(),
            timestamp,
        }
    }
}

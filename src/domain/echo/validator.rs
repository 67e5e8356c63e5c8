use std::borrow::Cow;

use validator::ValidationError;

/// 메시지 최대 길이 (UTF-16 코드 유닛 수)
pub const MAX_MESSAGE_CHARS: usize = 1000;

pub const EMPTY_MESSAGE: &str = "Message cannot be empty";
pub const MESSAGE_TOO_LONG: &str = "Message cannot exceed 1000 characters";

/// 메시지 검증
///
/// 각 규칙은 독립적으로 평가되며, 실패한 규칙은 모두 반환됩니다.
/// 공백 판정은 U+0020 이하의 코드 포인트(제어 문자 포함)만 공백으로 취급하고,
/// 길이는 UTF-16 코드 유닛 기준으로 셉니다.
pub fn validate_message(message: Option<&str>) -> Result<(), Vec<ValidationError>> {
    let mut violations = Vec::new();

    if message.map_or(true, is_blank) {
        violations.push(violation("not_blank", EMPTY_MESSAGE));
    }

    if let Some(m) = message {
        let length = m.encode_utf16().count();
        if length > MAX_MESSAGE_CHARS {
            let mut error = violation("length", MESSAGE_TOO_LONG);
            error.add_param(Cow::Borrowed("max"), &MAX_MESSAGE_CHARS);
            error.add_param(Cow::Borrowed("value"), &length);
            violations.push(error);
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn is_blank(message: &str) -> bool {
    message.trim_matches(|c: char| c <= ' ').is_empty()
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

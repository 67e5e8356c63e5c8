use super::dto::EchoResponse;

pub const ECHO_PREFIX: &str = "Echo: ";

pub struct EchoService;

impl EchoService {
    /// 검증된 메시지에 접두사를 붙이고 현재 시각을 기록합니다.
    pub fn echo(message: &str) -> EchoResponse {
        EchoResponse::new(format!("{}{}", ECHO_PREFIX, message))
    }
}

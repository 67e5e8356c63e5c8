use axum::{extract::rejection::JsonRejection, Json};

use super::{
    dto::{EchoRequest, EchoResponse},
    service::EchoService,
};
use crate::utils::{error::AppError, response::ErrorResponse};

/// Echo API 핸들러
///
/// 메시지를 검증한 뒤 `"Echo: "` 접두사와 서버 시각을 붙여 돌려줍니다.
#[utoipa::path(
    post,
    path = "/api/echo",
    tag = "Echo",
    request_body = EchoRequest,
    responses(
        (status = 200, description = "에코 성공", body = EchoResponse),
        (status = 400, description = "검증 실패", body = ErrorResponse),
        (status = 500, description = "서버 에러", body = ErrorResponse)
    )
)]
pub async fn echo_handler(
    request: Result<Json<EchoRequest>, JsonRejection>,
) -> Result<Json<EchoResponse>, AppError> {
    let Json(request) = request?;

    tracing::info!(
        message_chars = request.message.as_deref().map_or(0, |m| m.chars().count()),
        "Echo request received"
    );

    let message = request.into_validated()?;
    tracing::debug!("Request validation passed");

    Ok(Json(EchoService::echo(&message)))
}

pub const HEALTH_MESSAGE: &str = "Echo Bridge Backend is running!";

/// 헬스체크 API
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "서버 동작 중", body = String, content_type = "text/plain")
    )
)]
pub async fn health_check() -> &'static str {
    HEALTH_MESSAGE
}

pub mod config;
pub mod domain;
pub mod global;
pub mod shutdown;
pub mod utils;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::echo::handler::echo_handler,
        domain::health::handler::health_check,
    ),
    components(
        schemas(
            domain::echo::dto::EchoRequest,
            domain::echo::dto::EchoResponse,
            utils::response::ErrorResponse,
        )
    ),
    tags(
        (name = "Echo", description = "Echo API"),
        (name = "Health", description = "Health check API")
    )
)]
pub struct ApiDoc;

/// 애플리케이션 라우터
///
/// 패닉, 미지원 메서드, 없는 경로를 포함한 모든 장애는 `CatchPanicLayer`와 `AppError`를 거쳐 JSON 에러 응답이 됩니다.
pub fn app() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route(
            "/api/health",
            get(domain::health::health_check).fallback(global::fallback::method_not_allowed),
        )
        .route(
            "/api/echo",
            post(domain::echo::echo_handler).fallback(global::fallback::method_not_allowed),
        )
        .fallback(global::fallback::not_found)
        .layer(CatchPanicLayer::custom(utils::error::handle_panic))
        .layer(middleware::from_fn(global::middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

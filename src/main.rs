use echo_bridge_server::{app, config::AppConfig, shutdown::shutdown_signal, utils::logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 로깅 초기화 (guard는 main 종료 시까지 유지)
    let _log_guard = logging::init_logging();

    // 3. 설정 로드
    let config = AppConfig::from_env()?;
    let addr = config.socket_addr()?;

    // 4. 서버 실행
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Echo Bridge Backend listening on {}", addr);

    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

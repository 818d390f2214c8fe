use hackrx_query_webapp::{api, app_state::AppState, config::AppConfig};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // 1. Load .env and initialize logging
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 2. Load configuration
    let cfg = AppConfig::from_env().expect("failed to load configuration");

    // 3. Shared application state
    let app_state = AppState { config: cfg };

    // 4. Router with permissive CORS
    let app = api::create_router(app_state.clone()).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    // 5. Start the server
    let server_addr = &app_state.config.server_addr;
    let listener = tokio::net::TcpListener::bind(server_addr)
        .await
        .unwrap_or_else(|err| panic!("failed to bind {server_addr}: {err}"));
    info!("🚀 Server listening on http://{}", server_addr);
    info!(
        "📡 API endpoint: http://{}/api/v1/hackrx/run",
        server_addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutdown signal received, closing the server.");
        })
        .await
        .unwrap();

    info!("✅ Server shut down cleanly.");
}

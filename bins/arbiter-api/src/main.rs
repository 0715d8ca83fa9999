mod handlers;
mod metrics;
mod routes;

use arbiter_common::JudgeConfig;
use arbiter_judge::{LanguageRegistry, Orchestrator, RemoteJudge};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub struct AppState {
    pub orchestrator: Orchestrator<RemoteJudge>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("Arbiter API booting...");

    // A missing backend URL is a fatal startup condition, not a per-call error
    let config = JudgeConfig::from_env()
        .expect("judge backend configuration is required (set JUDGE_URL)");

    let registry = match std::env::var("LANGUAGES_CONFIG") {
        Ok(path) => LanguageRegistry::load(&path).expect("failed to load language config"),
        Err(_) => LanguageRegistry::default(),
    };
    info!(languages = ?registry.languages(), "Language registry loaded");

    let backend = RemoteJudge::new(&config).expect("failed to build judge client");
    let orchestrator = Orchestrator::new(backend, registry).with_max_retries(config.max_retries);
    info!(judge_url = %config.base_url, max_retries = config.max_retries, "Judge backend configured");

    metrics::init_metrics();

    let state = Arc::new(AppState { orchestrator });

    // Build router
    let app = Router::new().merge(routes::routes()).with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind to address");

    info!("HTTP server listening on {}", addr);
    info!("Ready to accept runs");

    axum::serve(listener, app).await.expect("Server error");
}

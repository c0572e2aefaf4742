use std::sync::Arc;
use std::time::Duration;

use dotenv::dotenv;
use roster::app::build_router;
use roster::auth::token::TokenConfig;
use roster::proxy::{UpstreamClient, DEFAULT_DATA_URL, DEFAULT_UPSTREAM_TIMEOUT};
use roster::shared::AppState;
use roster::user::repository::InMemoryUserRepository;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenv().ok();

    init_tracing();

    info!("Starting roster service");

    // Fail fast: a missing secret must stop the process here, not produce
    // tokens nobody can verify
    let token_config = TokenConfig::from_env();

    let data_url =
        std::env::var("DATA_URL").unwrap_or_else(|_| DEFAULT_DATA_URL.to_string());
    let upstream_timeout = std::env::var("UPSTREAM_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT);
    let upstream = Arc::new(UpstreamClient::new(data_url, upstream_timeout));

    let user_repository = Arc::new(InMemoryUserRepository::seeded());
    let app_state = AppState::new(user_repository, token_config, upstream);

    let app = build_router(app_state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .unwrap();
    info!("Server running on http://localhost:{port}");
    axum::serve(listener, app).await.unwrap();
}

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "roster=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer());

    // Mirror the console log into a file; if the file cannot be opened,
    // console-only logging still works
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("roster.log")
    {
        Ok(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Arc::new(file)),
            )
            .init(),
        Err(_) => registry.init(),
    }
}

#![cfg_attr(test, allow(clippy::disallowed_methods))]
// unwrap() stays out of the binary outside tests.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
use std::net::SocketAddr;
use std::sync::Arc;

use library_auth::{
    auth::StaticCredentials,
    catalog::BookCatalog,
    config::ServerConfig,
    http::{AppState, router},
    time::SystemTimeSource,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_auth=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables. A broken signing
    // configuration must stop the process before it accepts requests.
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Loaded configuration: issuer={}, audience={}, token_lifetime={}s, listen_port={}",
        config.signing.issuer(),
        config.signing.audience(),
        config.signing.token_lifetime().as_secs(),
        config.listen_port
    );

    let listen_port = config.listen_port;
    let state = AppState::new(
        config.signing,
        Arc::new(StaticCredentials::builtin()),
        Arc::new(BookCatalog::new()),
        Arc::new(SystemTimeSource),
    );

    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], listen_port));
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind: {e}");
            std::process::exit(1);
        });

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    });
}

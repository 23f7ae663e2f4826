//! Firm Relay - forwards advisor form submissions to a chat webhook

use anyhow::Result;
use firm_advisor::config::RelayConfig;
use firm_advisor::relay::{router, RelayState, SUBMIT_PATH};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "firm_relay=info,firm_advisor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = RelayConfig::from_env()?;
    if config.webhook_url.is_none() {
        tracing::warn!("CHAT_WEBHOOK_URL is not set; submissions will be rejected");
    }

    let app = router(RelayState::new(config.webhook_url));
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("firm-relay listening on http://{}{}", config.bind, SUBMIT_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

//! Relay server binary.
//!
//! Serves the chat UI and relays `POST /ask` to the configured webhook.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use relay_api::AppState;
use relay_api::config::ApiConfig;
use relay_core::webhook::WebhookConfig;
use tracing::{info, warn};

/// CLI arguments for the relay server.
#[derive(Parser, Debug)]
#[command(name = "relay_server", about = "Chat relay in front of a webhook backend")]
struct Args {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Webhook URL every chat message is forwarded to.
    #[arg(
        long,
        env = "WEBHOOK_URL",
        default_value = "http://localhost:5678/webhook/relay"
    )]
    webhook_url: String,

    /// Seconds to wait for the webhook before giving up.
    #[arg(long, env = "WEBHOOK_TIMEOUT_SECS", default_value_t = 20)]
    webhook_timeout_secs: u64,

    /// Directory with the browser UI.
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,relay_api=debug,relay_core=debug".into()),
        )
        .init();

    let args = Args::parse();

    let config = ApiConfig {
        bind_addr: format!("{}:{}", args.host, args.port),
        webhook: WebhookConfig::new(args.webhook_url)
            .with_timeout(Duration::from_secs(args.webhook_timeout_secs)),
        static_dir: Some(args.static_dir),
    };

    info!(
        bind_addr = %config.bind_addr,
        timeout_secs = args.webhook_timeout_secs,
        "starting relay_server"
    );

    let state = AppState::new(config.clone())?;
    let app = relay_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(addr = %local_addr, "relay listening on http://{local_addr}");
    info!(webhook = %config.webhook.url, "forwarding messages to webhook");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

//! Development server for UI work
//!
//! Serves the fixture content API on a fixed port so the UI has something
//! to talk to without the real backend. Every endpoint the site reads is
//! answered with the same canned data the integration tests use.
//!
//! Usage: cargo run -p dev-server

use anyhow::{Context, Result};
use payloads::ClientConfig;
use test_helpers::fixtures::{self, Behavior};
use test_helpers::telemetry;
use tracing::info;

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = telemetry::get_subscriber("info".into());
    telemetry::init_subscriber(subscriber)?;

    let port = match std::env::var("PORT") {
        Ok(port) => port.parse().context("PORT must be a port number")?,
        Err(_) => DEFAULT_PORT,
    };
    // FAIL_ALL=1 makes every request answer 500, to check error states.
    let behavior = match std::env::var("FAIL_ALL").ok() {
        Some(flag) if payloads::config::parse_flag(&flag) == Some(true) => {
            Behavior::Failing
        }
        _ => Behavior::Healthy,
    };

    let (server, port) = fixtures::build("127.0.0.1", port, behavior)
        .context("failed to bind the fixture api")?;
    let server = tokio::spawn(server);

    // The ui build gets the same settings, pointed at this server.
    let ui_config = ClientConfig {
        base_url: format!("http://127.0.0.1:{port}/api/v1"),
        ..ClientConfig::from_env().context("invalid client configuration")?
    };

    info!("Starting fixture content API ({behavior:?})");
    info!("   API: {}", ui_config.base_url);
    info!(
        "   UI:  cd ui && API_URL={} DEGRADE_TO_SAMPLE_DATA={} trunk serve",
        ui_config.base_url, ui_config.degrade_to_sample_data
    );
    info!("Press Ctrl+C to shutdown");

    tokio::select! {
        result = server => {
            result.context("fixture api task failed")??;
        }
        result = tokio::signal::ctrl_c() => {
            result?;
            info!("Shutting down development server");
        }
    }
    Ok(())
}

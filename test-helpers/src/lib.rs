pub mod fixtures;
pub mod telemetry;

use fixtures::Behavior;
use payloads::{APIClient, ClientConfig, ClientError};
use reqwest::StatusCode;
use std::time::Duration;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    pub port: u16,
    pub client: APIClient,
    /// Configuration the client was built from, for code that builds its own.
    pub config: ClientConfig,
}

impl TestApp {
    /// Client for the same server with the sample-data fallback toggled.
    pub fn with_degrade(mut self, degrade_to_sample_data: bool) -> Self {
        self.config.degrade_to_sample_data = degrade_to_sample_data;
        self
    }
}

pub fn fixture_config(port: u16) -> ClientConfig {
    ClientConfig {
        base_url: format!("http://127.0.0.1:{port}/api/v1"),
        timeout: Some(Duration::from_secs(5)),
        degrade_to_sample_data: true,
    }
}

fn init_test_logging() {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();
}

async fn spawn(port: u16, behavior: Behavior) -> anyhow::Result<TestApp> {
    init_test_logging();

    let (server, port) = fixtures::build("127.0.0.1", port, behavior)?;
    tokio::spawn(server);

    let config = fixture_config(port);
    let client = APIClient::new(&config)?;
    Ok(TestApp {
        port,
        client,
        config,
    })
}

/// Serve the fixture data on a specific port.
pub async fn spawn_app_on_port(port: u16) -> anyhow::Result<TestApp> {
    spawn(port, Behavior::Healthy).await
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    match spawn_app_on_port(0).await {
        Ok(app) => app,
        Err(e) => panic!("failed to start fixture api: {e:#}"),
    }
}

/// A server that answers every request with a 500.
pub async fn spawn_failing_app() -> TestApp {
    match spawn(0, Behavior::Failing).await {
        Ok(app) => app,
        Err(e) => panic!("failed to start failing api: {e:#}"),
    }
}

/// Configuration for a server that cannot be reached, producing network
/// errors.
pub fn unreachable_config() -> ClientConfig {
    // Port 9 (discard) is closed on test machines.
    ClientConfig {
        timeout: Some(Duration::from_secs(2)),
        ..fixture_config(9)
    }
}

pub fn unreachable_client() -> APIClient {
    match APIClient::new(&unreachable_config()) {
        Ok(client) => client,
        Err(e) => panic!("failed to build client: {e}"),
    }
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}

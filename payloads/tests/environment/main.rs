//! Reads the real process environment, so it lives in its own test binary
//! with a single test and no other threads touching the variables.

use std::time::Duration;

use payloads::{ClientConfig, ConfigError};

const VARS: [&str; 3] =
    ["API_URL", "API_TIMEOUT_SECS", "DEGRADE_TO_SAMPLE_DATA"];

fn set(name: &str, value: &str) {
    // SAFETY: this binary runs one test on one thread.
    unsafe { std::env::set_var(name, value) }
}

fn clear() {
    for name in VARS {
        // SAFETY: as above.
        unsafe { std::env::remove_var(name) }
    }
}

#[test]
fn client_config_follows_the_environment() -> anyhow::Result<()> {
    clear();
    assert_eq!(ClientConfig::from_env()?, ClientConfig::default());

    set("API_URL", "https://roads.example.org");
    set("API_TIMEOUT_SECS", "15");
    set("DEGRADE_TO_SAMPLE_DATA", "false");
    let config = ClientConfig::from_env()?;
    assert_eq!(config.origin(), "https://roads.example.org");
    assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    assert!(!config.degrade_to_sample_data);

    set("API_URL", "roads.example.org");
    assert_eq!(
        ClientConfig::from_env(),
        Err(ConfigError::InvalidBaseUrl("roads.example.org".into()))
    );

    clear();
    Ok(())
}

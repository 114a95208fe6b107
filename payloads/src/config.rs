use std::time::Duration;

use crate::normalize::AssetBase;

/// Used when `API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/v1";

/// Settings for talking to the content API.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// API root, with or without the `/api/v1` suffix.
    pub base_url: String,
    /// Request timeout. Ignored in the browser, where fetch has its own.
    pub timeout: Option<Duration>,
    /// Serve built-in sample content for resources that have it when the
    /// API cannot be reached.
    pub degrade_to_sample_data: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
            degrade_to_sample_data: true,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("API_URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
    #[error("{name} has an invalid value {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

impl ClientConfig {
    /// Read configuration from the process environment.
    ///
    /// - API_URL: API root (defaults to http://localhost:3000/api/v1)
    /// - API_TIMEOUT_SECS: optional request timeout in seconds
    /// - DEGRADE_TO_SAMPLE_DATA: true/false (defaults to true)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any variable source.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let base_url = lookup("API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.base_url);
        if !(base_url.starts_with("http://")
            || base_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        let timeout = match lookup("API_TIMEOUT_SECS") {
            Some(value) => Some(Duration::from_secs(
                value.trim().parse().map_err(|_| {
                    ConfigError::InvalidValue {
                        name: "API_TIMEOUT_SECS",
                        value: value.clone(),
                    }
                })?,
            )),
            None => defaults.timeout,
        };

        let degrade_to_sample_data = match lookup("DEGRADE_TO_SAMPLE_DATA") {
            Some(value) => parse_flag(&value).ok_or(
                ConfigError::InvalidValue {
                    name: "DEGRADE_TO_SAMPLE_DATA",
                    value,
                },
            )?,
            None => defaults.degrade_to_sample_data,
        };

        Ok(Self {
            base_url,
            timeout,
            degrade_to_sample_data,
        })
    }

    /// Origin serving the API and its uploaded files.
    pub fn origin(&self) -> String {
        self.assets().origin().to_string()
    }

    pub fn assets(&self) -> AssetBase {
        AssetBase::new(&self.base_url)
    }
}

pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_point_at_localhost() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.origin(), "http://localhost:3000");
    }

    #[test]
    fn reads_all_variables() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("API_URL", "https://roads.example.org/api/v1"),
            ("API_TIMEOUT_SECS", "10"),
            ("DEGRADE_TO_SAMPLE_DATA", "off"),
        ]))
        .unwrap();
        assert_eq!(config.origin(), "https://roads.example.org");
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
        assert!(!config.degrade_to_sample_data);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            ClientConfig::from_lookup(lookup(&[("API_URL", "localhost")])),
            Err(ConfigError::InvalidBaseUrl("localhost".into()))
        );
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[("API_TIMEOUT_SECS", "ten")])),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[(
                "DEGRADE_TO_SAMPLE_DATA",
                "maybe"
            )])),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}

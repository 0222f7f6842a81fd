//! Search configuration

use std::time::Duration;

use country_search_provider::{ClientConfig, DEFAULT_API_BASE};
use serde::{Deserialize, Serialize};

/// Quiet period before a typed search fires.
pub const DEFAULT_DEBOUNCE_DELAY_MS: u64 = 300;

/// Settings for the client and the controller.
///
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    /// Service origin.
    pub api_base_url: String,
    /// Debounce delay for the search input, in milliseconds.
    pub debounce_delay_ms: u64,
    /// Optional HTTP timeout in seconds. `None` never times out.
    pub request_timeout_secs: Option<u64>,
    /// Serve list clicks from the last rendered results instead of
    /// fetching the country again.
    pub reuse_cached_records: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            debounce_delay_ms: DEFAULT_DEBOUNCE_DELAY_MS,
            request_timeout_secs: None,
            reuse_cached_records: false,
        }
    }
}

impl SearchConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    /// Client settings derived from this config.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_base_url.clone(),
            timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = SearchConfig::from_json("{}");
        assert_eq!(config.ok(), Some(SearchConfig::default()));
    }

    #[test]
    fn defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.debounce_delay(), Duration::from_millis(300));
        assert_eq!(config.client_config(), ClientConfig::default());
        assert!(!config.reuse_cached_records);
    }

    #[test]
    fn camel_case_keys() {
        let config = SearchConfig::from_json(
            r#"{
                "apiBaseUrl": "http://localhost:9000",
                "debounceDelayMs": 150,
                "requestTimeoutSecs": 5,
                "reuseCachedRecords": true
            }"#,
        );
        let Ok(config) = config else {
            panic!("config should parse: {config:?}");
        };
        assert_eq!(config.debounce_delay(), Duration::from_millis(150));
        assert!(config.reuse_cached_records);

        let client = config.client_config();
        assert_eq!(client.base_url, "http://localhost:9000");
        assert_eq!(client.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(SearchConfig::from_json(r#"{"debounceDelayMs": "fast"}"#).is_err());
    }
}

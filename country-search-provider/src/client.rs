//! REST Countries client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};
use crate::http_client::{HttpUtils, is_success};
use crate::traits::CountrySource;
use crate::types::{CountryRecord, RestCountry, SearchResult};

/// Public REST Countries origin.
pub const DEFAULT_API_BASE: &str = "https://restcountries.com";

/// Fields requested from the name endpoint; everything the renderer needs.
pub(crate) const SEARCH_FIELDS: &str = "name,capital,population,flags,languages";

/// Connection settings for [`CountryClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Service origin without trailing path, e.g. `https://restcountries.com`.
    pub base_url: String,
    /// Whole-request timeout. `None` waits for as long as the server takes.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: None,
        }
    }
}

/// HTTP client for the `/v3/name/{name}` endpoint.
#[derive(Debug, Clone)]
pub struct CountryClient {
    client: Client,
    base_url: String,
}

impl CountryClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            log::error!("Failed to create HTTP client: {e}");
            ClientError::fetch(e)
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full request URL for a name fragment.
    ///
    /// The fragment is percent-encoded so it stays a single path segment;
    /// it is not otherwise altered.
    pub fn search_url(&self, name_fragment: &str) -> String {
        format!(
            "{}/v3/name/{}?fields={SEARCH_FIELDS}",
            self.base_url,
            urlencoding::encode(name_fragment)
        )
    }
}

#[async_trait]
impl CountrySource for CountryClient {
    async fn search(&self, name_fragment: &str) -> ClientResult<SearchResult> {
        let url = self.search_url(name_fragment);
        let (status, body) =
            HttpUtils::execute_request(self.client.get(&url), "GET", &url).await?;

        if !is_success(status) {
            log::error!("GET {url} returned HTTP {status}");
            return Err(ClientError::HttpStatus { status });
        }

        let raw: Vec<RestCountry> = HttpUtils::parse_json(&body)?;
        log::debug!("'{name_fragment}' matched {} countries", raw.len());
        Ok(raw.into_iter().map(CountryRecord::from).collect())
    }
}

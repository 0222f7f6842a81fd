//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use country_search_provider::{
    ClientError, ClientResult, CountryRecord, CountrySource, SearchResult,
};

use crate::utils::lock;

/// Build a record with a predictable flag URL.
pub fn country(
    name: &str,
    capital: &[&str],
    population: u64,
    languages: &[(&str, &str)],
) -> CountryRecord {
    CountryRecord {
        common_name: name.to_string(),
        official_name: format!("Republic of {name}"),
        capital: capital.iter().map(ToString::to_string).collect(),
        population,
        flag_image_url: format!("https://flagcdn.com/{}.svg", name.to_lowercase()),
        languages: languages
            .iter()
            .map(|(code, lang)| ((*code).to_string(), (*lang).to_string()))
            .collect(),
    }
}

// ===== MockCountrySource =====

/// Scripted country source.
///
/// Unscripted terms answer like the public service does for no match:
/// HTTP 404.
pub struct MockCountrySource {
    responses: Mutex<HashMap<String, ClientResult<SearchResult>>>,
    delays: Mutex<HashMap<String, Duration>>,
    calls: Mutex<Vec<String>>,
}

impl MockCountrySource {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            delays: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn set_response(&self, term: &str, response: ClientResult<SearchResult>) {
        lock(&self.responses).insert(term.to_string(), response);
    }

    /// Delay the answer for `term` (use with a paused clock).
    pub fn set_delay(&self, term: &str, delay: Duration) {
        lock(&self.delays).insert(term.to_string(), delay);
    }

    /// Terms searched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl CountrySource for MockCountrySource {
    async fn search(&self, name_fragment: &str) -> ClientResult<SearchResult> {
        lock(&self.calls).push(name_fragment.to_string());

        let delay = lock(&self.delays).get(name_fragment).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        lock(&self.responses)
            .get(name_fragment)
            .cloned()
            .unwrap_or(Err(ClientError::HttpStatus { status: 404 }))
    }
}

//! 测试辅助：固定应答的数据源和预置的 App

use std::sync::Arc;

use async_trait::async_trait;
use country_search_core::SearchConfig;
use country_search_provider::{
    ClientError, ClientResult, CountryRecord, CountrySource, SearchResult,
};
use tokio::runtime::Handle;

use crate::backend::SearchSession;
use crate::model::App;

/// Debounce delay used by test sessions.
pub const TEST_DELAY_MS: u64 = 50;

pub fn record(name: &str) -> CountryRecord {
    CountryRecord {
        common_name: name.to_string(),
        official_name: name.to_string(),
        capital: vec![format!("{name} City")],
        population: 1_000,
        flag_image_url: format!("https://flagcdn.com/{}.svg", name.to_lowercase()),
        languages: vec![("eng".to_string(), "English".to_string())],
    }
}

/// "ma" lists two countries, a full name finds one, anything else is a 404.
pub struct StubSource;

#[async_trait]
impl CountrySource for StubSource {
    async fn search(&self, name_fragment: &str) -> ClientResult<SearchResult> {
        match name_fragment {
            "ma" => Ok(vec![record("Malta"), record("Malawi"), record("Mali")]),
            "Malta" | "Malawi" | "Mali" => Ok(vec![record(name_fragment)]),
            _ => Err(ClientError::HttpStatus { status: 404 }),
        }
    }
}

/// Session on the current runtime; call from inside a Tokio test.
pub fn session() -> SearchSession {
    let config = SearchConfig {
        debounce_delay_ms: TEST_DELAY_MS,
        ..SearchConfig::default()
    };
    SearchSession::with_source(Arc::new(StubSource), &config, Handle::current())
}

pub fn app() -> App {
    App::new(session())
}

/// Let the debounce timer and spawned fetches finish (paused clock).
pub async fn settle() {
    tokio::time::sleep(std::time::Duration::from_millis(TEST_DELAY_MS * 4)).await;
}

//! # country-search-provider
//!
//! Client for the [REST Countries](https://restcountries.com) name-search
//! endpoint (`/v3/name/{name}`).
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use country_search_provider::{ClientConfig, CountryClient, CountrySource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CountryClient::new(&ClientConfig::default())?;
//!     for country in client.search("united").await? {
//!         println!("{} ({})", country.common_name, country.population);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! [`CountrySource::search`] returns [`ClientResult<T>`](ClientResult):
//!
//! - [`ClientError::HttpStatus`] — the service answered with a non-2xx status
//!   (the public service uses 404 for "no match")
//! - [`ClientError::Fetch`] — network failure or malformed response
//!
//! Requests are never retried.

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{ClientConfig, CountryClient, DEFAULT_API_BASE};
pub use error::{ClientError, ClientResult};
pub use traits::CountrySource;
pub use types::{CountryRecord, SearchResult};

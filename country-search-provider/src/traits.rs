use async_trait::async_trait;

use crate::error::ClientResult;
use crate::types::SearchResult;

/// Anything that can look countries up by name.
///
/// [`CountryClient`](crate::CountryClient) is the production implementation;
/// callers depend on this trait so tests can script responses.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Search countries whose name matches `name_fragment`.
    ///
    /// The fragment is passed through unvalidated. Zero matches is
    /// `Ok(vec![])` only if the service answers with an empty array; the
    /// public service answers 404 instead, which surfaces as
    /// [`ClientError::HttpStatus`](crate::ClientError::HttpStatus).
    async fn search(&self, name_fragment: &str) -> ClientResult<SearchResult>;
}

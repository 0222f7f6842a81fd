//! Generic HTTP request helpers
//!
//! Sending the request, logging, and reading the response body live here so
//! the client itself only builds URLs and maps payloads.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text.
    ///
    /// Any status is returned as-is; interpreting it is up to the caller.
    /// Transport failures (including timeouts) and body read failures become
    /// [`ClientError::Fetch`] and are logged before returning.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ClientError> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                log::error!("{method_name} {url} timed out: {e}");
            } else {
                log::error!("{method_name} {url} failed: {e}");
            }
            ClientError::fetch(e)
        })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| {
            log::error!("Failed to read response body: {e}");
            ClientError::fetch(format!("Failed to read response body: {e}"))
        })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Parse a JSON response body.
    ///
    /// A malformed body is a [`ClientError::Fetch`]: the caller cannot tell
    /// it apart from a broken transport, and neither can the user.
    pub fn parse_json<T>(response_text: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ClientError::fetch(format!("Malformed response: {e}"))
        })
    }
}

/// Whether a status code counts as success (2xx).
pub(crate) fn is_success(status_code: u16) -> bool {
    (200..300).contains(&status_code)
}

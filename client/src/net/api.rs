//! HTTP fetch helpers for the catalog document and policy files.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): stubs returning [`FetchError::Unavailable`] since
//! these requests are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is surfaced as a [`FetchError`] for the page to render as a
//! static message. Nothing retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use catalog::Catalog;

/// Error returned by the fetch helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The body was not the expected document.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Called outside a browser.
    #[error("not available outside the browser")]
    Unavailable,
}

/// Parse a fetched catalog body.
fn decode_catalog(body: &str) -> Result<Catalog, FetchError> {
    catalog::parse_catalog(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// GET `url` and return the body text.
///
/// # Errors
///
/// Returns [`FetchError::Network`] if the request fails and
/// [`FetchError::Status`] for a non-2xx response.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        resp.text().await.map_err(|e| FetchError::Network(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(FetchError::Unavailable)
    }
}

/// Fetch and decode the catalog document.
///
/// # Errors
///
/// Propagates [`fetch_text`] failures and returns [`FetchError::Decode`] when
/// the body is not a valid catalog.
pub async fn fetch_catalog(url: &str) -> Result<Catalog, FetchError> {
    let body = fetch_text(url).await?;
    decode_catalog(&body)
}

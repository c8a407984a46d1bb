//! REST API helpers for communicating with the listings backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`FetchError::Unsupported`], since the
//! listings endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into [`FetchError`]. Callers log it and fall back
//! to whatever state they already hold; nothing here panics.

#![allow(clippy::unused_async)]

use crate::net::types::CarListing;

/// Path of the car-listings endpoint, served by the external backend.
pub const CARS_ENDPOINT: &str = "/api/cars";

/// A failed car-listings fetch: the single error kind this client knows.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (network failure, abort).
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Status(u16),
    /// The response body was not a valid listings batch.
    #[error("invalid response body: {0}")]
    Body(String),
    /// Fetching is only possible in the browser.
    #[error("not available during server rendering")]
    Unsupported,
}

/// Fetch the full car-listings batch from [`CARS_ENDPOINT`].
///
/// No pagination or filtering parameters; the server returns the whole
/// sequence, and response order is preserved.
///
/// # Errors
///
/// Returns [`FetchError`] on any rejection. The caller decides whether that
/// is fatal; for the top-cars section it is not.
pub async fn fetch_cars() -> Result<Vec<CarListing>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CARS_ENDPOINT)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        resp.json::<Vec<CarListing>>()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Unsupported)
    }
}

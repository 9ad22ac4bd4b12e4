//! Endpoint abstraction: anything that can resolve to a URL.

use url::Url;

/// A provider of the target URL for a call.
///
/// Returning `None` signals a construction failure, which the client surfaces
/// as [`ApiError::UrlConstruction`](crate::error::ApiError::UrlConstruction).
/// The core reads from the provider once per call and never caches the
/// result.
pub trait Endpoint {
    fn url(&self) -> Option<Url>;
}

/// A literal URL is its own endpoint.
impl Endpoint for Url {
    fn url(&self) -> Option<Url> {
        Some(self.clone())
    }
}

//! Outbound request construction.
//!
//! # Design
//! `build` is the single place where an endpoint and a verb descriptor turn
//! into a concrete request. The token is attached verbatim as the
//! `Authorization` header value; the core does not impose a scheme prefix,
//! so callers that need `Bearer ` include it in the token themselves. POST
//! bodies are canonically JSON-encoded.

use url::Url;

use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::method::{Method, Verb};

/// A fully formed request, built once per call and immutable thereafter.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub url: Url,
    pub verb: Verb,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// Combine an endpoint and a verb descriptor into an [`OutboundRequest`].
///
/// Fails with [`ApiError::UrlConstruction`] when the endpoint yields no URL.
pub fn build(endpoint: &dyn Endpoint, method: &Method) -> Result<OutboundRequest, ApiError> {
    let url = endpoint.url().ok_or(ApiError::UrlConstruction)?;

    let meta = method.meta();
    let mut headers: Vec<(String, String)> = meta
        .headers
        .iter()
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();
    if let Some(token) = &meta.token {
        headers.push(("Authorization".to_string(), token.clone()));
    }

    let body = match method.body() {
        Some(mapping) => {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
            Some(serde_json::to_vec(mapping).map_err(|_| ApiError::Unknown)?)
        }
        None => None,
    };

    Ok(OutboundRequest {
        url,
        verb: method.verb(),
        headers,
        body,
    })
}

//! Transport abstraction and the default reqwest-backed implementation.
//!
//! # Design
//! The client never touches the network itself; it hands an
//! [`OutboundRequest`] to a [`Transport`] and receives a [`RawOutcome`]. The
//! trait keeps the façade testable with in-memory fakes and leaves timeouts,
//! pooling, and TLS to the transport's own configuration. Implementations
//! must be safe for arbitrarily many concurrent `send` calls.

use std::future::Future;

use crate::method::Verb;
use crate::request::OutboundRequest;
use crate::response::{RawOutcome, RawResponse, TransportFailure};

/// The collaborator that executes one request and reports one outcome.
pub trait Transport: Send + Sync {
    fn send(&self, request: OutboundRequest) -> impl Future<Output = RawOutcome> + Send;
}

/// Default transport over a shared [`reqwest::Client`].
///
/// The inner client is cheaply cloneable and already safe for concurrent
/// use; configure timeouts via [`reqwest::ClientBuilder`] and inject through
/// [`ReqwestTransport::with_client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl From<Verb> for reqwest::Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Delete => reqwest::Method::DELETE,
            Verb::Patch => reqwest::Method::PATCH,
        }
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: OutboundRequest) -> impl Future<Output = RawOutcome> + Send {
        let client = self.client.clone();
        async move {
            let OutboundRequest {
                url,
                verb,
                headers,
                body,
            } = request;

            let mut builder = client.request(verb.into(), url);
            for (name, value) in &headers {
                builder = builder.header(name, value);
            }
            if let Some(body) = body {
                builder = builder.body(body);
            }

            let response = match builder.send().await {
                Ok(response) => response,
                Err(err) => return RawOutcome::Failure(TransportFailure::Network(err.to_string())),
            };

            let status = response.status().as_u16();
            match response.bytes().await {
                Ok(bytes) => RawOutcome::Response(RawResponse {
                    status,
                    body: Some(bytes.to_vec()),
                }),
                Err(err) => RawOutcome::Failure(TransportFailure::Network(err.to_string())),
            }
        }
    }
}

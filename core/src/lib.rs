//! Generic HTTP request/response façade.
//!
//! # Overview
//! Builds an [`OutboundRequest`] from an [`Endpoint`] and a [`Method`]
//! descriptor, executes it through an injected [`Transport`], classifies the
//! outcome into [`ApiError`], and decodes successful bodies through a
//! caller-supplied [`Decode`] capability.
//!
//! # Design
//! - Two equivalent execution modes: `ApiClient::fetch` (awaitable, failures
//!   are the call's `Err`) and `ApiClient::fetch_with_callback` (failures are
//!   values, delivered exactly once on a caller-chosen runtime handle).
//! - The core holds no cross-call state beyond the shared transport handle.
//! - Collaborators are narrow traits so tests substitute in-memory fakes;
//!   [`ReqwestTransport`] and [`JsonDecoder`] are the shipped defaults.
//! - No retries, caching, or streaming: one request per call, one outcome.

pub mod client;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod method;
pub mod request;
pub mod response;
pub mod transport;

pub use client::{ApiClient, CallHandle};
pub use decode::{Decode, JsonDecoder};
pub use endpoint::Endpoint;
pub use error::{ApiError, HttpErrorKind};
pub use method::{Method, RequestMeta, Verb};
pub use request::OutboundRequest;
pub use response::{RawOutcome, RawResponse, TransportFailure};
pub use transport::{ReqwestTransport, Transport};

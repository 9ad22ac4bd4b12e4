//! Raw transport outcomes and their classification.
//!
//! # Design
//! `classify` is the single source of truth for the outcome rules, shared by
//! both execution modes. The checks run in a fixed precedence: transport
//! failure, then no-content, then missing body, then the status table.
//! `Ok(None)` means "success, nothing to decode"; `Ok(Some(bytes))` hands the
//! body to the decoder.

use crate::error::{ApiError, HttpErrorKind};

/// Status code that short-circuits decoding.
pub const NO_CONTENT: u16 = 204;

/// What the transport produced for a single request.
#[derive(Debug, Clone)]
pub enum RawOutcome {
    Failure(TransportFailure),
    Response(RawResponse),
}

/// A connection-level failure, before any HTTP response existed.
#[derive(Debug, Clone)]
pub enum TransportFailure {
    /// Connectivity, TLS, DNS, timeout — whatever the transport surfaced.
    Network(String),
    /// The transport returned something that is not an HTTP response.
    InvalidResponse,
}

/// A well-formed HTTP response as seen by the transport. `body` is `None`
/// when the transport could not supply body bytes at all, as opposed to an
/// empty body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Option<Vec<u8>>,
}

/// Classify a transport outcome into decode-ready bytes or a typed error.
pub fn classify(outcome: RawOutcome) -> Result<Option<Vec<u8>>, ApiError> {
    let response = match outcome {
        RawOutcome::Failure(TransportFailure::Network(message)) => {
            return Err(ApiError::Network(message))
        }
        RawOutcome::Failure(TransportFailure::InvalidResponse) => {
            return Err(ApiError::InvalidResponse)
        }
        RawOutcome::Response(response) => response,
    };

    if response.status == NO_CONTENT {
        return Ok(None);
    }
    let body = response.body.ok_or(ApiError::NoData)?;
    match HttpErrorKind::from_status(response.status) {
        Some(kind) => Err(ApiError::Http(kind)),
        None => Ok(Some(body)),
    }
}

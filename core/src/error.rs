//! Error types for the request façade.
//!
//! # Design
//! One flat enum covers every stage: URL resolution, transport, status
//! classification, and body decoding. Non-2xx statuses collapse into a small
//! `HttpErrorKind` bucket rather than carrying the raw code, so callers match
//! on intent ("unauthorized") instead of numeric ranges. All variants are
//! `Clone + PartialEq` so tests can assert on exact error values.

use std::fmt;

use thiserror::Error;

/// Unified failure type produced by any stage of a call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The endpoint provider yielded no URL.
    #[error("endpoint produced no url")]
    UrlConstruction,

    /// Transport-level failure: connectivity, TLS, DNS, timeout.
    #[error("network failure: {0}")]
    Network(String),

    /// The transport returned something that is not a well-formed HTTP
    /// response.
    #[error("malformed http response")]
    InvalidResponse,

    /// A success status implied a body but the transport supplied none.
    #[error("response carried no body")]
    NoData,

    /// The server answered with a non-2xx status.
    #[error("http error: {0}")]
    Http(HttpErrorKind),

    /// The response body could not be decoded into the expected type. The
    /// message preserves the decoder's own diagnostic.
    #[error("failed to decode response body: {0}")]
    ParseResponse(String),

    /// Catch-all for failures that fit no other variant, e.g. a body that
    /// refuses to serialize during request construction.
    #[error("unexpected failure")]
    Unknown,
}

/// Classification buckets for non-2xx status codes.
///
/// Exactly one bucket matches any given status; codes outside the explicit
/// table (418, 600, ...) land in `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    ServerError,
    Unknown,
}

impl HttpErrorKind {
    /// Map a status code to its error bucket, or `None` for any 2xx.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            400 => Some(HttpErrorKind::BadRequest),
            401 => Some(HttpErrorKind::Unauthorized),
            403 => Some(HttpErrorKind::Forbidden),
            404 => Some(HttpErrorKind::NotFound),
            500 => Some(HttpErrorKind::ServerError),
            _ => Some(HttpErrorKind::Unknown),
        }
    }
}

impl fmt::Display for HttpErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HttpErrorKind::BadRequest => "bad request",
            HttpErrorKind::Unauthorized => "unauthorized",
            HttpErrorKind::Forbidden => "forbidden",
            HttpErrorKind::NotFound => "not found",
            HttpErrorKind::ServerError => "server error",
            HttpErrorKind::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_table_statuses_map_to_their_bucket() {
        assert_eq!(HttpErrorKind::from_status(400), Some(HttpErrorKind::BadRequest));
        assert_eq!(HttpErrorKind::from_status(401), Some(HttpErrorKind::Unauthorized));
        assert_eq!(HttpErrorKind::from_status(403), Some(HttpErrorKind::Forbidden));
        assert_eq!(HttpErrorKind::from_status(404), Some(HttpErrorKind::NotFound));
        assert_eq!(HttpErrorKind::from_status(500), Some(HttpErrorKind::ServerError));
    }

    #[test]
    fn any_2xx_is_not_an_error() {
        assert_eq!(HttpErrorKind::from_status(200), None);
        assert_eq!(HttpErrorKind::from_status(201), None);
        assert_eq!(HttpErrorKind::from_status(204), None);
        assert_eq!(HttpErrorKind::from_status(299), None);
    }

    #[test]
    fn statuses_outside_the_table_map_to_unknown() {
        assert_eq!(HttpErrorKind::from_status(418), Some(HttpErrorKind::Unknown));
        assert_eq!(HttpErrorKind::from_status(302), Some(HttpErrorKind::Unknown));
        assert_eq!(HttpErrorKind::from_status(503), Some(HttpErrorKind::Unknown));
        assert_eq!(HttpErrorKind::from_status(600), Some(HttpErrorKind::Unknown));
    }

    #[test]
    fn display_preserves_decode_diagnostics() {
        let err = ApiError::ParseResponse("missing field `message`".to_string());
        assert_eq!(
            err.to_string(),
            "failed to decode response body: missing field `message`"
        );
    }
}

//! Decoder capability: turning response bytes into typed values.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// A per-call capability that decodes raw response bytes.
///
/// Implementations fail with [`ApiError::ParseResponse`] carrying the
/// underlying diagnostic. The client is generic over this trait, so a caller
/// can plug in any wire format; [`JsonDecoder`] is the default.
pub trait Decode {
    type Output;

    fn decode(&self, bytes: &[u8]) -> Result<Self::Output, ApiError>;
}

/// Default decoder: JSON bytes into any `DeserializeOwned` type.
#[derive(Debug)]
pub struct JsonDecoder<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonDecoder<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonDecoder<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> Decode for JsonDecoder<T> {
    type Output = T;

    fn decode(&self, bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(|err| ApiError::ParseResponse(err.to_string()))
    }
}

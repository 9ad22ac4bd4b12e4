//! Verb descriptors: the HTTP method plus its attached headers, token, and
//! (for POST only) body mapping.
//!
//! # Design
//! `Method` is a sum type where only the `Post` variant carries a body, so
//! "GET with a body" is unrepresentable rather than merely ignored. The
//! shared header/token surface lives in `RequestMeta` and is reached through
//! accessors instead of per-variant pattern matches at every call site.

use std::collections::HashMap;
use std::fmt;

use serde_json::{Map, Value};

/// Headers and optional auth token attached to any verb.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMeta {
    pub headers: HashMap<String, String>,
    pub token: Option<String>,
}

impl RequestMeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header, consuming and returning `self` for chaining.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Attach an auth token, consuming and returning `self` for chaining.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

/// An HTTP verb together with its request metadata. Only `Post` carries a
/// body mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum Method {
    Get(RequestMeta),
    Post(RequestMeta, Map<String, Value>),
    Put(RequestMeta),
    Delete(RequestMeta),
    Patch(RequestMeta),
}

impl Method {
    pub fn verb(&self) -> Verb {
        match self {
            Method::Get(_) => Verb::Get,
            Method::Post(_, _) => Verb::Post,
            Method::Put(_) => Verb::Put,
            Method::Delete(_) => Verb::Delete,
            Method::Patch(_) => Verb::Patch,
        }
    }

    pub fn meta(&self) -> &RequestMeta {
        match self {
            Method::Get(meta)
            | Method::Post(meta, _)
            | Method::Put(meta)
            | Method::Delete(meta)
            | Method::Patch(meta) => meta,
        }
    }

    /// The body mapping, present only for `Post`.
    pub fn body(&self) -> Option<&Map<String, Value>> {
        match self {
            Method::Post(_, body) => Some(body),
            _ => None,
        }
    }
}

/// The bare verb tag, used on the wire and by transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
            Verb::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Substitutable response sources.
//!
//! A [`ResponseSource`] either yields a [`Response`] or fails with
//! [`ResponseError::InvalidResponse`]. Callers handle the failure where they
//! make the call; any source can stand in for any other.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A successfully fetched response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub body: String,
}

impl Response {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error("invalid response")]
    InvalidResponse,
}

pub trait ResponseSource {
    fn fetch(&self) -> Result<Response, ResponseError>;
}

/// Always answers with the same payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticResponseSource {
    body: String,
}

impl StaticResponseSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

impl ResponseSource for StaticResponseSource {
    fn fetch(&self) -> Result<Response, ResponseError> {
        Ok(Response::new(self.body.clone()))
    }
}

/// Mock source whose every response is invalid.
#[derive(Debug, Default, Clone, Copy)]
pub struct InvalidResponseSource;

impl ResponseSource for InvalidResponseSource {
    fn fetch(&self) -> Result<Response, ResponseError> {
        Err(ResponseError::InvalidResponse)
    }
}

/// Result of [`fetch_or_fallback`] after the error has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Fetched(Response),
    Recovered(ResponseError),
}

/// Fetch from `source`, catching a failure at this call site.
pub fn fetch_or_fallback(source: &dyn ResponseSource) -> Outcome {
    match source.fetch() {
        Ok(response) => {
            tracing::debug!(bytes = response.body.len(), "response fetched");
            Outcome::Fetched(response)
        }
        Err(err) => {
            tracing::warn!(error = %err, "response rejected; continuing without it");
            Outcome::Recovered(err)
        }
    }
}

// Axum extractor that decodes a size-limited JSON request body.

use crate::domain::errors::JsonError;
use crate::interface_adapters::json::{DEFAULT_MAX_BODY_BYTES, read_json_body};
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

// Per-router body cap, installed as a request extension.
#[derive(Debug, Clone, Copy)]
pub struct JsonBodyLimit(pub usize);

impl Default for JsonBodyLimit {
    fn default() -> Self {
        Self(DEFAULT_MAX_BODY_BYTES)
    }
}

/// Decoded JSON request body.
///
/// Unlike `axum::Json` this does not require a content type, rejects
/// trailing data after the document, and renders every rejection as the
/// `{"error": ...}` envelope.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let JsonBodyLimit(limit) = req
            .extensions()
            .get::<JsonBodyLimit>()
            .copied()
            .unwrap_or_default();

        let value = read_json_body(req.into_body(), limit).await?;
        Ok(JsonBody(value))
    }
}

// JSON request decoding and response encoding helpers.

use crate::domain::errors::JsonError;
use crate::interface_adapters::http::ErrorResponse;
use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use serde::{Serialize, de::DeserializeOwned};
use std::{fmt::Display, io::Read};

pub const CONTENT_TYPE_JSON: &str = "application/json";

// Conventional cap for buffered request bodies (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1 << 20;

/// Decodes exactly one JSON document from `reader`.
///
/// Unknown fields are ignored. Fields missing from the input fall back to
/// their defaults only when `T` is annotated with `#[serde(default)]`;
/// otherwise serde reports them as a decode failure.
///
/// Anything other than whitespace after the document is rejected, as is an
/// empty stream. On failure no value is produced, so whatever the caller
/// already holds stays untouched.
pub fn read_json<T, R>(reader: R) -> Result<T, JsonError>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut deserializer = serde_json::Deserializer::from_reader(reader);
    let value = T::deserialize(&mut deserializer).map_err(JsonError::Decode)?;
    // Only whitespace may follow the first document.
    deserializer.end().map_err(JsonError::Decode)?;
    Ok(value)
}

/// Buffers at most `limit` bytes of `body` and decodes them with [`read_json`].
pub async fn read_json_body<T>(body: Body, limit: usize) -> Result<T, JsonError>
where
    T: DeserializeOwned,
{
    let bytes = Limited::new(body, limit)
        .collect()
        .await
        .map_err(|err| {
            if err.downcast_ref::<LengthLimitError>().is_some() {
                JsonError::BodyTooLarge { limit }
            } else {
                JsonError::BodyRead(err.to_string())
            }
        })?
        .to_bytes();

    read_json(&bytes[..])
}

/// Builds a response carrying `data` as its JSON body.
///
/// Caller headers are appended first; the content type is forced to
/// `application/json` afterwards so a caller-supplied one never survives.
/// The body is exactly `serde_json::to_vec(data)`, and serialization runs
/// before anything else so a failure never yields a partial response.
pub fn write_json<T>(
    status: StatusCode,
    data: &T,
    headers: &HeaderMap,
) -> Result<Response, JsonError>
where
    T: Serialize + ?Sized,
{
    let body = serde_json::to_vec(data).map_err(JsonError::Encode)?;

    let mut response = Response::new(Body::from(body));
    let response_headers = response.headers_mut();
    for (name, value) in headers {
        response_headers.append(name, value.clone());
    }
    response_headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
    *response.status_mut() = status;

    Ok(response)
}

/// Builds a `{"error": "<err>"}` response, defaulting to 400 Bad Request.
pub fn error_json<E>(err: E, status: Option<StatusCode>) -> Result<Response, JsonError>
where
    E: Display,
{
    let status = status.unwrap_or(StatusCode::BAD_REQUEST);
    let envelope = ErrorResponse {
        error: err.to_string(),
    };
    write_json(status, &envelope, &HeaderMap::new())
}

// HTTP status reported for each helper failure.
pub fn error_status(err: &JsonError) -> StatusCode {
    if !err.is_client_error() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    match err {
        JsonError::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        _ => StatusCode::BAD_REQUEST,
    }
}

// Pre-encoded envelope used when the envelope itself cannot be encoded.
fn internal_error_response() -> Response {
    let mut response = Response::new(Body::from(r#"{"error":"internal error"}"#));
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        error_json(&self, Some(error_status(&self))).unwrap_or_else(|_| internal_error_response())
    }
}

use crate::domain::errors::JsonError;
use crate::interface_adapters::extract::JsonBody;
use crate::interface_adapters::json::{error_json, write_json};
use crate::interface_adapters::protocol::{EchoRequest, EchoResponse, HealthResponse};
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::Response;
use tracing::debug;

pub const ECHO_LENGTH_HEADER: &str = "x-echo-length";

// Liveness probe.
pub async fn health() -> Result<Response, JsonError> {
    write_json(
        StatusCode::OK,
        &HealthResponse { status: "ok" },
        &HeaderMap::new(),
    )
}

// Echo the message back along with its length.
pub async fn echo(JsonBody(request): JsonBody<EchoRequest>) -> Result<Response, JsonError> {
    let length = request.message.chars().count();
    debug!(length, "echo request");

    let mut headers = HeaderMap::new();
    headers.insert(ECHO_LENGTH_HEADER, HeaderValue::from(length));

    write_json(
        StatusCode::OK,
        &EchoResponse {
            message: request.message,
            length,
        },
        &headers,
    )
}

// Fallback for unknown routes, keeping the JSON error schema.
pub async fn not_found(uri: Uri) -> Result<Response, JsonError> {
    debug!(%uri, "route not found");
    error_json("route not found", Some(StatusCode::NOT_FOUND))
}

use crate::interface_adapters::extract::JsonBodyLimit;
use crate::interface_adapters::handlers::{echo, health, not_found};
use axum::{
    Extension, Router,
    routing::{get, post},
};

// Build the HTTP router for the reference service.
pub fn app(body_limit: JsonBodyLimit) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/echo", post(echo))
        .fallback(not_found)
        .layer(Extension(body_limit))
}

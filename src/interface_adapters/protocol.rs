use serde::{Deserialize, Serialize};

// Request payload for the echo route; a missing message decodes as empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EchoRequest {
    pub message: String,
}

// Response payload for the echo route.
#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub message: String,
    // Length of the message in characters.
    pub length: usize,
}

// Response payload for the health probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

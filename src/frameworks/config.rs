use crate::interface_adapters::json::DEFAULT_MAX_BODY_BYTES;
use std::env;

// Runtime/server settings read from the environment.

pub fn http_port() -> u16 {
    env::var("RESTFUL_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}

pub fn max_body_bytes() -> usize {
    parse_body_limit(env::var("RESTFUL_MAX_BODY_BYTES").ok().as_deref())
}

// Zero or unparsable values fall back to the default cap.
fn parse_body_limit(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_MAX_BODY_BYTES)
}

pub mod domain;
pub mod frameworks;
pub mod interface_adapters;

pub use domain::errors::JsonError;
pub use frameworks::config::http_port;
pub use frameworks::server::{run, run_with_config};
pub use interface_adapters::extract::{JsonBody, JsonBodyLimit};
pub use interface_adapters::json::{
    CONTENT_TYPE_JSON, DEFAULT_MAX_BODY_BYTES, error_json, read_json, read_json_body, write_json,
};

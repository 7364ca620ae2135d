// Interface adapters: JSON helpers and the HTTP surface built on them.

pub mod extract;
pub mod handlers;
pub mod http;
pub mod json;
pub mod protocol;
pub mod routes;

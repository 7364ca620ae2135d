// Domain layer: error kinds shared by the JSON helpers.

pub mod errors;

pub use errors::JsonError;

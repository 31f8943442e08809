//! HTTP response module
//!
//! JSON response builders and the wire types serialized into them.

mod response;
mod types;

pub use response::{bad_request, json_response, method_not_allowed, not_found};
pub use types::{ErrorResponse, HealthResponse, OperationResponse};

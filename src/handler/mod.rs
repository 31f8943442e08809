//! Request handler module
//!
//! Routing dispatch for the four arithmetic endpoints plus query-string
//! extraction.

pub mod query;
pub mod router;

pub use router::handle_request;

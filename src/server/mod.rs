// Server module entry point
// Listener creation, per-connection serving, and shutdown signal handling

pub mod connection;
pub mod listener;
pub mod signal;

pub use listener::create_reusable_listener;

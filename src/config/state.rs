// Application state module

use crate::logger::Logger;

use super::types::Config;

/// Shared application state handed to every request handler.
///
/// The logger lives here rather than in a process-wide global so handlers
/// receive it as an injected capability at construction time.
pub struct AppState {
    pub config: Config,
    pub logger: Logger,
}

impl AppState {
    pub const fn new(config: Config, logger: Logger) -> Self {
        Self { config, logger }
    }
}

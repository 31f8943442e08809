// Configuration module entry point
// Loads file/env configuration and owns the shared application state

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::{Config, HealthConfig, LoggingConfig, ServerConfig};

impl Config {
    /// Load configuration from the default `config.toml` (optional).
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension).
    ///
    /// Precedence: built-in defaults < config file < `PORT` environment
    /// variable (which overrides only the listening port).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("logging.level", "info")?
            .set_default("logging.error_log_file", "logs/error.log")?
            .set_default("logging.combined_log_file", "logs/combined.log")?
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;
        cfg.apply_port_override(std::env::var("PORT").ok().as_deref())?;
        Ok(cfg)
    }

    /// Apply the `PORT` environment override to the listening port.
    ///
    /// Separated from `load_from` so the override can be exercised without
    /// touching process environment.
    fn apply_port_override(&mut self, port: Option<&str>) -> Result<(), config::ConfigError> {
        if let Some(port) = port {
            self.server.port = port.parse().map_err(|e| {
                config::ConfigError::Message(format!("Invalid PORT value '{port}': {e}"))
            })?;
        }
        Ok(())
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_config_file() {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.error_log_file.as_deref(), Some("logs/error.log"));
        assert_eq!(
            cfg.logging.combined_log_file.as_deref(),
            Some("logs/combined.log")
        );
        assert!(cfg.health.enabled);
        assert_eq!(cfg.health.path, "/healthz");
    }

    #[test]
    fn port_override_replaces_the_configured_port() {
        let mut cfg = Config::load_from("no-such-config-file").unwrap();
        cfg.apply_port_override(Some("8081")).unwrap();
        assert_eq!(cfg.server.port, 8081);
    }

    #[test]
    fn absent_port_override_keeps_the_default() {
        let mut cfg = Config::load_from("no-such-config-file").unwrap();
        cfg.apply_port_override(None).unwrap();
        assert_eq!(cfg.server.port, 3000);
    }

    #[test]
    fn invalid_port_override_is_an_error() {
        let mut cfg = Config::load_from("no-such-config-file").unwrap();
        let err = cfg.apply_port_override(Some("not-a-port")).unwrap_err();
        assert!(err.to_string().contains("Invalid PORT value 'not-a-port'"));

        assert!(cfg.apply_port_override(Some("70000")).is_err());
    }

    #[test]
    fn socket_addr_is_built_from_host_and_port() {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 3000);
        assert!(addr.is_ipv4());
    }
}

// Configuration module entry point
// Manages application configuration and process-wide state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{AssetsConfig, Config, LoggingConfig, PerformanceConfig, ServerConfig};

/// Environment variable surfaced verbatim by `/api/info`.
const INSTANCE_ID_VAR: &str = "INSTANCE_ID";

impl Config {
    /// Load configuration from the default "config.toml" location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; every key has a default, and environment
    /// variables prefixed with `STATSBASKET` override both.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("STATSBASKET").separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.debug", false)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("assets.dir", "static")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Read the deployment instance id from the process environment.
///
/// Absent (or non-unicode) values fall back to `"unknown"`. Read once at
/// startup; handlers get the value through [`AppState`].
pub fn instance_id_from_env() -> String {
    std::env::var(INSTANCE_ID_VAR).unwrap_or_else(|_| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 5000);
        assert!(!cfg.server.debug);
        assert_eq!(cfg.server.workers, None);
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert_eq!(cfg.logging.access_log_file, None);
        assert_eq!(cfg.assets.dir, "static");
        assert_eq!(cfg.performance.keep_alive_timeout, 75);
    }

    #[test]
    fn test_socket_addr_from_defaults() {
        let cfg = Config::load_from("no-such-config-file").unwrap();
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 5000);
    }

    #[test]
    fn test_instance_id_env_round_trip() {
        std::env::remove_var("INSTANCE_ID");
        assert_eq!(instance_id_from_env(), "unknown");

        std::env::set_var("INSTANCE_ID", "i-0123456789abcdef0");
        assert_eq!(instance_id_from_env(), "i-0123456789abcdef0");
        std::env::remove_var("INSTANCE_ID");
    }
}

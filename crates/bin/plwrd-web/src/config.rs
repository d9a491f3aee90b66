//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `plwrd.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use plwrd_adapter_http_axum::state::SiteConfig;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Endpoints handed to the front-end.
    pub site: SiteSection,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Directory holding the compiled front-end, served under `/pkg`.
    pub assets_dir: String,
}

/// Front-end settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Browser tab title.
    pub title: String,
    /// URL of the admin action endpoint.
    pub admin_endpoint: String,
    /// URL the paste form posts to.
    pub paste_action: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `plwrd.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("plwrd.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("PLWRD_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("PLWRD_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("PLWRD_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("PLWRD_ASSETS_DIR") {
            self.server.assets_dir = val;
        }
        if let Some(val) = var("PLWRD_ADMIN_ENDPOINT") {
            self.site.admin_endpoint = val;
        }
        if let Some(val) = var("PLWRD_PASTE_ACTION") {
            self.site.paste_action = val;
        }
        if let Some(val) = var("PLWRD_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.site.admin_endpoint.trim().is_empty() {
            return Err(ConfigError::Validation(
                "admin endpoint must not be empty".to_string(),
            ));
        }
        if self.site.paste_action.trim().is_empty() {
            return Err(ConfigError::Validation(
                "paste action must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Front-end settings for the HTTP adapter.
    #[must_use]
    pub fn site(&self) -> SiteConfig {
        SiteConfig {
            title: self.site.title.clone(),
            admin_endpoint: self.site.admin_endpoint.clone(),
            paste_action: self.site.paste_action.clone(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            assets_dir: "dist".to_string(),
        }
    }
}

impl Default for SiteSection {
    fn default() -> Self {
        let site = SiteConfig::default();
        Self {
            title: site.title,
            admin_endpoint: site.admin_endpoint,
            paste_action: site.paste_action,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "plwrd_web=info,plwrd=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.assets_dir, "dist");
        assert_eq!(config.site.admin_endpoint, "/plwrd");
        assert_eq!(config.site.paste_action, "/paste");
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090
            assets_dir = 'public/pkg'

            [site]
            title = 'apps'
            admin_endpoint = '/api/plwrd'
            paste_action = '/p'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.assets_dir, "public/pkg");
        assert_eq!(config.site.title, "apps");
        assert_eq!(config.site.admin_endpoint, "/api/plwrd");
        assert_eq!(config.site.paste_action, "/p");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 8080
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.site.admin_endpoint, "/plwrd");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("PLWRD_HOST", "127.0.0.1"),
            ("PLWRD_PORT", "8081"),
            ("PLWRD_ASSETS_DIR", "/srv/pkg"),
            ("PLWRD_ADMIN_ENDPOINT", "/admin/plwrd"),
            ("PLWRD_PASTE_ACTION", "/p"),
            ("PLWRD_LOG", "debug"),
        ]));

        assert_eq!(config.bind_addr(), "127.0.0.1:8081");
        assert_eq!(config.server.assets_dir, "/srv/pkg");
        assert_eq!(config.site.admin_endpoint, "/admin/plwrd");
        assert_eq!(config.site.paste_action, "/p");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_let_bind_override_host_and_port() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("PLWRD_PORT", "8081"), ("PLWRD_BIND", "[::1]:7000")]));
        assert_eq!(config.bind_addr(), "[::1]:7000");
    }

    #[test]
    fn should_prefer_rust_log_over_plwrd_log() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("PLWRD_LOG", "debug"), ("RUST_LOG", "trace")]));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_ignore_unparsable_port() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("PLWRD_PORT", "http")]));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_endpoints() {
        let mut config = Config::default();
        config.site.admin_endpoint = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.site.paste_action = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_hand_site_settings_to_http_adapter() {
        let site = Config::default().site();
        assert_eq!(site, SiteConfig::default());
    }
}

//! Configuration module with per-concern sub-modules
//!
//! - `auth` - inbound token verification (key, scope whitelist)
//! - `downstream` - outbound HTTP client and downstream service settings
//! - `environment` - environment detection and logging configuration
//! - `server` - HTTP server binding
//!
//! Configuration is layered: built-in defaults, then an optional
//! `config/<service>.toml` file, then environment variables prefixed with the
//! service's prefix (`PUBLIC__AUTH__TOKEN_KEY`, `PRIVATE__SERVER__PORT`, ...).

pub mod auth;
pub mod downstream;
pub mod environment;
pub mod server;

use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::AuthConfig;
pub use downstream::{DownstreamConfig, HttpClientConfig, MAX_TOKEN_LIFETIME_MS};
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Static description of a deployable service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceProfile {
    /// Service name, also the name of its optional config file
    pub name: &'static str,
    /// Prefix for environment variable overrides
    pub env_prefix: &'static str,
    /// Port used when none is configured
    pub default_port: u16,
    /// Whether the service fans out to a downstream service
    pub requires_downstream: bool,
}

impl ServiceProfile {
    /// The client-facing service running the scope-gated orchestrator
    pub const PUBLIC: ServiceProfile = ServiceProfile {
        name: "public-service",
        env_prefix: "PUBLIC",
        default_port: 8081,
        requires_downstream: true,
    };

    /// The downstream service only reachable with a minted service token
    pub const PRIVATE: ServiceProfile = ServiceProfile {
        name: "private-service",
        env_prefix: "PRIVATE",
        default_port: 8082,
        requires_downstream: false,
    };
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Inbound token verification
    pub auth: AuthConfig,

    /// Outbound HTTP client settings
    #[serde(default)]
    pub http: HttpClientConfig,

    /// Downstream service (public-service only)
    #[serde(default)]
    pub downstream: Option<DownstreamConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for a service from its config file and environment
    pub fn load(profile: &ServiceProfile) -> Result<Self, ConfigError> {
        let builder = Self::defaults(profile)?
            .add_source(File::with_name(&format!("config/{}", profile.name)).required(false))
            .add_source(
                config::Environment::with_prefix(profile.env_prefix)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::build(profile, builder)
    }

    /// Load configuration for a service from an in-memory TOML document
    pub fn from_toml(profile: &ServiceProfile, toml: &str) -> Result<Self, ConfigError> {
        let builder = Self::defaults(profile)?.add_source(File::from_str(toml, FileFormat::Toml));
        Self::build(profile, builder)
    }

    /// Check invariants the services rely on at startup
    pub fn validate(&self, profile: &ServiceProfile) -> Result<(), ConfigError> {
        if self.auth.token_key.trim().is_empty() {
            return Err(ConfigError::Invalid("auth.token_key must not be empty".to_string()));
        }
        if self.auth.supported_scopes.is_empty() {
            return Err(ConfigError::Invalid(
                "auth.supported_scopes must name at least one scope".to_string(),
            ));
        }
        if self.http.timeout_ms == 0 {
            return Err(ConfigError::Invalid("http.timeout_ms must be positive".to_string()));
        }

        match (&self.downstream, profile.requires_downstream) {
            (None, true) => Err(ConfigError::Invalid(format!(
                "{} requires a [downstream] section",
                profile.name
            ))),
            (Some(downstream), _) if downstream.token_key.trim().is_empty() => Err(
                ConfigError::Invalid("downstream.token_key must not be empty".to_string()),
            ),
            (Some(downstream), _)
                if downstream.token_lifetime_ms <= 0
                    || downstream.token_lifetime_ms > MAX_TOKEN_LIFETIME_MS =>
            {
                Err(ConfigError::Invalid(format!(
                    "downstream.token_lifetime_ms must be between 1 and {}",
                    MAX_TOKEN_LIFETIME_MS
                )))
            }
            _ => Ok(()),
        }
    }

    fn defaults(profile: &ServiceProfile) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(profile.default_port))?;

        if profile.requires_downstream {
            builder =
                builder.set_default("downstream.message_uri", downstream::default_message_uri())?;
        }

        Ok(builder)
    }

    fn build(
        profile: &ServiceProfile,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<Self, ConfigError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate(profile)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBLIC_TOML: &str = r#"
        [auth]
        token_key = "ABC123"
        supported_scopes = ["PUBLIC_SERVICE", "PRIVATE_SERVICE"]

        [downstream]
        token_key = "DEF456"
    "#;

    #[test]
    fn test_public_profile_defaults() {
        let config = AppConfig::from_toml(&ServiceProfile::PUBLIC, PUBLIC_TOML).unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.http.timeout_ms, 5000);
        assert_eq!(config.environment, Environment::Development);

        let downstream = config.downstream.unwrap();
        assert_eq!(downstream.message_uri, "http://localhost:8082/message");
        assert_eq!(downstream.token_key, "DEF456");
        assert_eq!(downstream.token_lifetime_ms, 10_000);
    }

    #[test]
    fn test_private_profile_without_downstream() {
        let toml = r#"
            [auth]
            token_key = "DEF456"
            supported_scopes = "PRIVATE_SERVICE"
        "#;
        let config = AppConfig::from_toml(&ServiceProfile::PRIVATE, toml).unwrap();
        assert_eq!(config.server.port, 8082);
        assert!(config.downstream.is_none());
        assert_eq!(config.auth.supported_scopes, vec!["PRIVATE_SERVICE"]);
    }

    #[test]
    fn test_missing_token_key_refuses_to_load() {
        let toml = r#"
            [auth]
            supported_scopes = ["PRIVATE_SERVICE"]
        "#;
        assert!(AppConfig::from_toml(&ServiceProfile::PRIVATE, toml).is_err());
    }

    #[test]
    fn test_empty_token_key_is_invalid() {
        let toml = r#"
            [auth]
            token_key = "  "
            supported_scopes = ["PRIVATE_SERVICE"]
        "#;
        let err = AppConfig::from_toml(&ServiceProfile::PRIVATE, toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_public_profile_requires_downstream_key() {
        let toml = r#"
            [auth]
            token_key = "ABC123"
            supported_scopes = ["PUBLIC_SERVICE"]
        "#;
        assert!(AppConfig::from_toml(&ServiceProfile::PUBLIC, toml).is_err());
    }

    #[test]
    fn test_zero_timeout_is_invalid() {
        let toml = format!("{}\n[http]\ntimeout_ms = 0\n", PUBLIC_TOML);
        let err = AppConfig::from_toml(&ServiceProfile::PUBLIC, &toml).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_token_lifetime_is_bounded() {
        for lifetime in ["0", "-5", "3600001", "4611686018427387903"] {
            let toml = format!("{}token_lifetime_ms = {}\n", PUBLIC_TOML, lifetime);
            let err = AppConfig::from_toml(&ServiceProfile::PUBLIC, &toml).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "lifetime {}", lifetime);
        }

        let toml = format!("{}token_lifetime_ms = 3600000\n", PUBLIC_TOML);
        let config = AppConfig::from_toml(&ServiceProfile::PUBLIC, &toml).unwrap();
        assert_eq!(config.downstream.unwrap().token_lifetime_ms, 3_600_000);
    }

    #[test]
    fn test_environment_overrides_are_layered() {
        let profile = ServiceProfile {
            name: "layering-check",
            env_prefix: "COURIER_LAYERING",
            default_port: 9090,
            requires_downstream: true,
        };
        let vars = [
            ("COURIER_LAYERING__AUTH__TOKEN_KEY", "ABC123"),
            ("COURIER_LAYERING__AUTH__SUPPORTED_SCOPES", "PUBLIC_SERVICE,PRIVATE_SERVICE"),
            ("COURIER_LAYERING__HTTP__TIMEOUT_MS", "1234"),
            ("COURIER_LAYERING__DOWNSTREAM__TOKEN_KEY", "DEF456"),
        ];
        for (key, value) in vars {
            std::env::set_var(key, value);
        }

        let loaded = AppConfig::load(&profile);
        for (key, _) in vars {
            std::env::remove_var(key);
        }

        let config = loaded.unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.auth.token_key, "ABC123");
        assert_eq!(config.auth.supported_scopes, vec!["PUBLIC_SERVICE", "PRIVATE_SERVICE"]);
        assert_eq!(config.http.timeout_ms, 1234);

        let downstream = config.downstream.unwrap();
        assert_eq!(downstream.token_key, "DEF456");
        assert_eq!(downstream.message_uri, "http://localhost:8082/message");
    }
}

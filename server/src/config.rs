//! Server configuration module.
//!
//! This module provides configuration loading for the library server from
//! environment variables.
//!
//! # Environment Variables
//!
//! - `LIBRARY_JWT_KEY`: HMAC secret for signing tokens (required, at least 32 bytes)
//! - `LIBRARY_JWT_ISSUER`: Token issuer (required)
//! - `LIBRARY_JWT_AUDIENCE`: Token audience (required)
//! - `LIBRARY_JWT_LIFETIME_SECS`: Token lifetime in seconds (default: `3600`)
//! - `LIBRARY_LISTEN_PORT`: Port to listen on (default: `5169`)
//!
//! # Invariants
//!
//! - A loaded `ServerConfig` always carries a valid `SigningConfig`.
//! - `listen_port` is always a valid port number.

use std::time::Duration;

use crate::auth::{SigningConfig, SigningConfigError};

const KEY_VAR: &str = "LIBRARY_JWT_KEY";
const ISSUER_VAR: &str = "LIBRARY_JWT_ISSUER";
const AUDIENCE_VAR: &str = "LIBRARY_JWT_AUDIENCE";
const LIFETIME_VAR: &str = "LIBRARY_JWT_LIFETIME_SECS";
const PORT_VAR: &str = "LIBRARY_LISTEN_PORT";

/// Server configuration.
///
/// # Post-conditions
///
/// - `signing` is valid for both issuing and validating tokens.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Token signing configuration shared by issuer and validator.
    pub signing: SigningConfig,
    /// Port to listen on for HTTP connections.
    pub listen_port: u16,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable has an invalid value.
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    /// The signing values do not form a valid configuration.
    #[error("invalid signing configuration: {0}")]
    Signing(#[from] SigningConfigError),
}

impl ServerConfig {
    /// Default port for the server.
    pub const DEFAULT_PORT: u16 = 5169;
    /// Default token lifetime in seconds.
    pub const DEFAULT_LIFETIME_SECS: u64 = 3600;

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `LIBRARY_JWT_KEY`, `LIBRARY_JWT_ISSUER` or `LIBRARY_JWT_AUDIENCE` is not set or is empty
    /// - `LIBRARY_JWT_LIFETIME_SECS` or `LIBRARY_LISTEN_PORT` is set but not a valid number
    /// - the signing values are rejected by `SigningConfig::new`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = required(&lookup, KEY_VAR)?;
        let issuer = required(&lookup, ISSUER_VAR)?;
        let audience = required(&lookup, AUDIENCE_VAR)?;
        let lifetime = Self::load_lifetime(&lookup)?;
        let listen_port = Self::load_listen_port(&lookup)?;

        let signing = SigningConfig::new(secret.into_bytes(), issuer, audience, lifetime)?;

        Ok(Self {
            signing,
            listen_port,
        })
    }

    /// Load the token lifetime.
    ///
    /// Returns the default if not set.
    fn load_lifetime<F>(lookup: &F) -> Result<Duration, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(value) = lookup(LIFETIME_VAR) else {
            return Ok(Duration::from_secs(Self::DEFAULT_LIFETIME_SECS));
        };

        match value.parse::<u64>() {
            Ok(0) | Err(_) => Err(ConfigError::InvalidValue {
                name: LIFETIME_VAR.to_string(),
                message: format!("'{value}' is not a positive number of seconds"),
            }),
            Ok(secs) => Ok(Duration::from_secs(secs)),
        }
    }

    /// Load the listen port.
    ///
    /// Returns the default if not set.
    fn load_listen_port<F>(lookup: &F) -> Result<u16, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(value) = lookup(PORT_VAR) else {
            return Ok(Self::DEFAULT_PORT);
        };

        match value.parse::<u16>() {
            Ok(0) | Err(_) => Err(ConfigError::InvalidValue {
                name: PORT_VAR.to_string(),
                message: format!("'{value}' is not a valid port number (must be 1-65535)"),
            }),
            Ok(port) => Ok(port),
        }
    }
}

/// Read a variable that must be present and non-empty.
fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))?;

    if value.is_empty() {
        return Err(ConfigError::InvalidValue {
            name: name.to_string(),
            message: "must not be empty".to_string(),
        });
    }

    Ok(value)
}

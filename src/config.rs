//! Configuration management for the contact service.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first when one is present.

use crate::db::IN_MEMORY;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// Configuration for the contact service.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database path, or `:memory:` (default)
    pub database_path: String,

    /// Address the HTTP server listens on (default: 127.0.0.1:8080)
    pub bind_address: SocketAddr,

    /// Create the example contacts on an empty store (default: true)
    pub seed_contacts: bool,

    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CONTACT_DB_PATH`: SQLite file, or `:memory:` (default)
    /// - `BIND_ADDRESS`: listen address (default: 127.0.0.1:8080)
    /// - `SEED_CONTACTS`: true/false/1/0/yes/no (default: true)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let database_path = env::var("CONTACT_DB_PATH").unwrap_or_else(|_| IN_MEMORY.to_string());
        if database_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_DB_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let bind_address = Self::parse_env_socket_addr("BIND_ADDRESS", DEFAULT_BIND_ADDRESS)?;
        let seed_contacts = Self::parse_env_bool("SEED_CONTACTS", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            database_path,
            bind_address,
            seed_contacts,
            log_level,
        })
    }

    /// Parse an environment variable as a socket address with a default value.
    fn parse_env_socket_addr(var_name: &str, default: &str) -> ConfigResult<SocketAddr> {
        let raw = env::var(var_name).unwrap_or_else(|_| default.to_string());
        raw.parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a socket address like 127.0.0.1:8080, got: {}", raw),
            })
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: IN_MEMORY.to_string(),
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8080)),
            seed_contacts: true,
            log_level: "info".to_string(),
        }
    }
}

//! Service configuration from environment variables.

use crate::error::ConfigError;
use crate::store::Engine;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/core";
pub const DEFAULT_BREEDS_FILE: &str = "./breeds.csv";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_API_PREFIX: &str = "/v1";

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub database_url: String,
    pub breeds_file: PathBuf,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Prefix for the /breeds routes; empty mounts them at the root.
    pub api_prefix: String,
    pub skip_import: bool,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        Engine::from_url(&database_url)?;

        let breeds_file = PathBuf::from(lookup("BREEDS_FILE").unwrap_or_else(|| DEFAULT_BREEDS_FILE.into()));

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "DATABASE_MAX_CONNECTIONS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let api_prefix = normalize_prefix(&lookup("API_PREFIX").unwrap_or_else(|| DEFAULT_API_PREFIX.into()));

        let skip_import = match lookup("BREEDS_SKIP_IMPORT") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidValue {
                key: "BREEDS_SKIP_IMPORT",
                value: raw,
            })?,
            None => false,
        };

        Ok(ServiceConfig {
            database_url,
            breeds_file,
            bind_addr,
            max_connections,
            api_prefix,
            skip_import,
        })
    }
}

/// "v1", "/v1/" and "/v1" all become "/v1"; "" and "/" become "".
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

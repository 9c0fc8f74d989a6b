//! Runtime configuration read from the process environment.

use std::net::SocketAddr;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "USUARIOS_BIND_ADDR";
pub const SEED_VAR: &str = "USUARIOS_SEED";

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 5000);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid socket address")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var}={value:?} is not a boolean (expected true/false/1/0)")]
    InvalidBool { var: &'static str, value: String },
}

/// Settings for the HTTP service. Defaults: listen on `0.0.0.0:5000`, load seed users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub seed: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            seed: true,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value.trim().parse().map_err(|_| ConfigError::InvalidAddr {
                var: BIND_ADDR_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(SEED_VAR) {
            config.seed = parse_bool(&value).ok_or_else(|| ConfigError::InvalidBool {
                var: SEED_VAR,
                value: value.clone(),
            })?;
        }

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_listen_on_all_interfaces_port_5000() {
        let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:5000");
        assert!(config.seed);
    }

    #[test]
    fn overrides_are_applied() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            (BIND_ADDR_VAR, "127.0.0.1:8081"),
            (SEED_VAR, "false"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.port(), 8081);
        assert!(!config.seed);
    }

    #[test]
    fn malformed_values_are_rejected() {
        let err = ApiConfig::from_lookup(lookup_from(&[(BIND_ADDR_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { .. }));

        let err = ApiConfig::from_lookup(lookup_from(&[(SEED_VAR, "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { .. }));
    }
}

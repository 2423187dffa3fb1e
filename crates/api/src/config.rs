//! Server configuration read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "CATALOG_BIND_ADDR";
pub const PORT_VAR: &str = "PORT";
pub const SEED_VAR: &str = "CATALOG_SEED";

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a socket address like 0.0.0.0:3000, got {value:?}")]
    InvalidBindAddr { var: &'static str, value: String },

    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Start with the default seed set instead of an empty catalog.
    pub seed: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            seed: true,
        }
    }
}

impl ApiConfig {
    /// Read configuration from process environment variables.
    ///
    /// - `CATALOG_BIND_ADDR`: full socket address (wins over `PORT`)
    /// - `PORT`: port on `0.0.0.0` (default: 3000)
    /// - `CATALOG_SEED`: load seed products (default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = value.trim().parse().map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value,
            })?;
        } else if let Some(value) = lookup(PORT_VAR) {
            let port: u16 = value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value,
            })?;
            config.bind_addr.set_port(port);
        }

        if let Some(value) = lookup(SEED_VAR) {
            config.seed = match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => return Err(ConfigError::InvalidFlag { var: SEED_VAR, value }),
            };
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ApiConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3000");
        assert!(config.seed);
    }

    #[test]
    fn bind_addr_wins_over_port() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("CATALOG_BIND_ADDR", "127.0.0.1:8081"),
            ("PORT", "9999"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8081");
    }

    #[test]
    fn port_only() {
        let config = ApiConfig::from_lookup(lookup(&[("PORT", "4000")])).unwrap();
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:4000");
    }

    #[test]
    fn seed_flag() {
        let config = ApiConfig::from_lookup(lookup(&[("CATALOG_SEED", "FALSE")])).unwrap();
        assert!(!config.seed);
    }

    #[test]
    fn malformed_values_are_errors() {
        assert!(matches!(
            ApiConfig::from_lookup(lookup(&[("CATALOG_BIND_ADDR", "localhost")])),
            Err(ConfigError::InvalidBindAddr { .. })
        ));
        assert!(matches!(
            ApiConfig::from_lookup(lookup(&[("PORT", "70000")])),
            Err(ConfigError::InvalidPort { .. })
        ));
        assert!(matches!(
            ApiConfig::from_lookup(lookup(&[("CATALOG_SEED", "maybe")])),
            Err(ConfigError::InvalidFlag { .. })
        ));
    }
}

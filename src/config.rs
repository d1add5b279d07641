//! Process configuration, read from the environment (and an optional `.env`).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const HOST_ENV_NAME: &str = "DEPLOY_GATEWAY_HOST";
const PORT_ENV_NAME: &str = "DEPLOY_GATEWAY_PORT";
const LOG_DIR_ENV_NAME: &str = "DEPLOY_GATEWAY_LOG_DIR";
const LOG_LEVEL_ENV_NAME: &str = "DEPLOY_GATEWAY_LOG_LEVEL";
const DEV_MODE_ENV_NAME: &str = "DEPLOY_GATEWAY_DEV_MODE";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} is not a valid {expected}: '{value}'")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("failed to load .env: {0}")]
    DotEnv(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
    /// Infer cluster credentials (kubeconfig) instead of requiring the in-cluster service account.
    pub dev_mode: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_dir: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            dev_mode: false,
        }
    }
}

impl GatewayConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        check_dotenv(dotenvy::dotenv().map(|_| ()))?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(host) = get(HOST_ENV_NAME) {
            config.host = host.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: HOST_ENV_NAME,
                expected: "IP address",
                value: host,
            })?;
        }

        if let Some(port) = get(PORT_ENV_NAME) {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: PORT_ENV_NAME,
                expected: "port number",
                value: port,
            })?;
        }

        config.log_dir = get(LOG_DIR_ENV_NAME).map(PathBuf::from);

        if let Some(level) = get(LOG_LEVEL_ENV_NAME) {
            config.log_level = level.trim().to_string();
        }

        if let Some(flag) = get(DEV_MODE_ENV_NAME) {
            config.dev_mode = parse_bool(&flag).ok_or(ConfigError::InvalidValue {
                key: DEV_MODE_ENV_NAME,
                expected: "boolean",
                value: flag,
            })?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// A missing `.env` is fine; an unreadable or malformed one is not.
fn check_dotenv(result: Result<(), dotenvy::Error>) -> Result<(), ConfigError> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(ConfigError::DotEnv(e.to_string())),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = GatewayConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, GatewayConfig::default());
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn reads_every_key() {
        let config = GatewayConfig::from_lookup(lookup_from(&[
            (HOST_ENV_NAME, "127.0.0.1"),
            (PORT_ENV_NAME, "9090"),
            (LOG_DIR_ENV_NAME, "/var/log/gateway"),
            (LOG_LEVEL_ENV_NAME, "debug"),
            (DEV_MODE_ENV_NAME, "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:9090");
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/gateway")));
        assert_eq!(config.log_level, "debug");
        assert!(config.dev_mode);
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config =
            GatewayConfig::from_lookup(lookup_from(&[(PORT_ENV_NAME, ""), (LOG_DIR_ENV_NAME, " ")]))
                .unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn rejects_bad_port() {
        let err = GatewayConfig::from_lookup(lookup_from(&[(PORT_ENV_NAME, "eighty")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "DEPLOY_GATEWAY_PORT is not a valid port number: 'eighty'"
        );
    }

    #[test]
    fn rejects_bad_dev_mode_flag() {
        let err = GatewayConfig::from_lookup(lookup_from(&[(DEV_MODE_ENV_NAME, "maybe")]));
        assert!(matches!(
            err,
            Err(ConfigError::InvalidValue { key: DEV_MODE_ENV_NAME, .. })
        ));
    }

    #[test]
    fn missing_dotenv_file_is_ignored() {
        let missing = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(check_dotenv(Err(missing)), Ok(()));
        assert_eq!(check_dotenv(Ok(())), Ok(()));
    }

    #[test]
    fn malformed_dotenv_file_aborts() {
        let bad_line = dotenvy::Error::LineParse("DEPLOY GATEWAY PORT=80".to_string(), 7);
        let err = check_dotenv(Err(bad_line)).unwrap_err();
        assert!(matches!(err, ConfigError::DotEnv(_)));
        assert!(err.to_string().starts_with("failed to load .env: "));
    }

    #[test]
    fn unreadable_dotenv_file_aborts() {
        let denied = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert!(matches!(check_dotenv(Err(denied)), Err(ConfigError::DotEnv(_))));
    }
}

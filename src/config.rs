//! Configuration for SynergAI.
//!
//! Only the listen address and log format are configurable, through
//! environment variables (a `.env` file is honoured if present). The listen
//! address is read only when serving, and command-line flags win over it.

use std::net::{IpAddr, SocketAddr};

use crate::error::ConfigError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Load a `.env` file into the process environment if one is present.
pub fn load_dotenv() {
    // Ignore errors if not found
    let _ = dotenvy::dotenv();
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read host and port from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(None, None)
    }

    /// Build from explicit overrides, consulting the environment only for
    /// values that were not given.
    pub fn resolve(host: Option<IpAddr>, port: Option<u16>) -> Result<Self, ConfigError> {
        let host = match host {
            Some(host) => host,
            None => host_from_env()?,
        };
        let port = match port {
            Some(port) => port,
            None => port_from_env()?,
        };
        Ok(Self { host, port })
    }

    /// Socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn host_from_env() -> Result<IpAddr, ConfigError> {
    optional_env("SYNERGAI_HOST")?
        .unwrap_or_else(|| DEFAULT_HOST.to_string())
        .parse()
        .map_err(|e| ConfigError::InvalidValue {
            key: "SYNERGAI_HOST".to_string(),
            message: format!("must be an IP address: {e}"),
        })
}

fn port_from_env() -> Result<u16, ConfigError> {
    optional_env("SYNERGAI_PORT")?
        .map(|s| s.parse())
        .transpose()
        .map_err(|e| ConfigError::InvalidValue {
            key: "SYNERGAI_PORT".to_string(),
            message: format!("must be a valid port number: {e}"),
        })
        .map(|port| port.unwrap_or(DEFAULT_PORT))
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{other}' (expected pretty or json)")),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            format: parse_optional_env("SYNERGAI_LOG_FORMAT", LogFormat::default())?,
        })
    }
}

pub(crate) fn optional_env(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(val) if val.is_empty() => Ok(None),
        Ok(val) => Ok(Some(val)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ConfigError::ParseError(format!(
            "failed to read {key}: {e}"
        ))),
    }
}

pub(crate) fn parse_optional_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    optional_env(key)?
        .map(|s| {
            s.parse().map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{e}"),
            })
        })
        .transpose()
        .map(|opt| opt.unwrap_or(default))
}

// Env vars are process-global, so serialize tests that mutate them.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    fn clear_server_env() {
        unsafe {
            std::env::remove_var("SYNERGAI_HOST");
            std::env::remove_var("SYNERGAI_PORT");
        }
    }

    #[test]
    fn optional_env_returns_none_for_missing_var() {
        let _lock = ENV_LOCK.lock();
        unsafe { std::env::remove_var("_TEST_SYN_MISSING_42") };
        assert!(optional_env("_TEST_SYN_MISSING_42").unwrap().is_none());
    }

    #[test]
    fn optional_env_returns_none_for_empty_string() {
        let _lock = ENV_LOCK.lock();
        unsafe { std::env::set_var("_TEST_SYN_EMPTY_42", "") };
        assert!(optional_env("_TEST_SYN_EMPTY_42").unwrap().is_none());
        unsafe { std::env::remove_var("_TEST_SYN_EMPTY_42") };
    }

    #[test]
    fn server_config_defaults() {
        let _lock = ENV_LOCK.lock();
        clear_server_env();
        let cfg = ServerConfig::from_env().unwrap();
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn server_config_reads_env() {
        let _lock = ENV_LOCK.lock();
        unsafe {
            std::env::set_var("SYNERGAI_HOST", "127.0.0.1");
            std::env::set_var("SYNERGAI_PORT", "9100");
        }
        let cfg = ServerConfig::from_env().unwrap();
        clear_server_env();
        assert_eq!(cfg.addr().to_string(), "127.0.0.1:9100");
    }

    #[test]
    fn server_config_rejects_bad_port() {
        let _lock = ENV_LOCK.lock();
        unsafe { std::env::set_var("SYNERGAI_PORT", "xyz") };
        let err = ServerConfig::from_env().unwrap_err();
        clear_server_env();
        match err {
            ConfigError::InvalidValue { key, .. } => assert_eq!(key, "SYNERGAI_PORT"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn explicit_overrides_skip_invalid_env() {
        let _lock = ENV_LOCK.lock();
        unsafe {
            std::env::set_var("SYNERGAI_HOST", "not-an-ip");
            std::env::set_var("SYNERGAI_PORT", "bad");
        }
        let result = ServerConfig::resolve(Some("127.0.0.1".parse().unwrap()), Some(9000));
        clear_server_env();
        assert_eq!(result.unwrap().addr().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn partial_override_still_reads_env_for_the_rest() {
        let _lock = ENV_LOCK.lock();
        unsafe { std::env::set_var("SYNERGAI_PORT", "bad") };
        let port_only = ServerConfig::resolve(None, Some(9000));
        let host_only = ServerConfig::resolve(Some("127.0.0.1".parse().unwrap()), None);
        clear_server_env();
        assert_eq!(port_only.unwrap().port, 9000);
        assert!(host_only.is_err());
    }

    #[test]
    fn server_config_rejects_hostname() {
        let _lock = ENV_LOCK.lock();
        unsafe { std::env::set_var("SYNERGAI_HOST", "localhost") };
        let result = ServerConfig::from_env();
        clear_server_env();
        assert!(result.is_err());
    }

    #[test]
    fn log_format_parses() {
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn log_format_env_invalid() {
        let _lock = ENV_LOCK.lock();
        unsafe { std::env::set_var("SYNERGAI_LOG_FORMAT", "xml") };
        let result = LoggingConfig::from_env();
        unsafe { std::env::remove_var("SYNERGAI_LOG_FORMAT") };
        assert!(result.is_err());
    }
}

//! Configuration loader for the `weather-monitoring` service.
//!
//! Centralizes runtime settings and their defaults, loaded from environment
//! variables (with optional `.env` support provided by the caller), so no
//! other module calls `env::var` directly.
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{anyhow, Result};

/// Parse an optional environment variable with a default value.
macro_rules! parse_env_or {
    ($var_name:expr, $ty:ty, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.trim().parse::<$ty>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Port the service has always listened on.
pub const DEFAULT_PORT: u16 = 8000;

/// Strongly typed application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // ---
    /// Address to bind the HTTP listener to.
    pub bind_addr: IpAddr,

    /// TCP port for the HTTP listener.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `BIND_ADDR` – listen address (default: `0.0.0.0`)
/// - `PORT` – listen port (default: 8000)
///
/// Returns an error if a variable is set but cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    // ---
    let defaults = Config::default();
    let bind_addr = parse_env_or!("BIND_ADDR", IpAddr, defaults.bind_addr);
    let port = parse_env_or!("PORT", u16, defaults.port);

    Ok(Config { bind_addr, port })
}

impl Config {
    /// Socket address the HTTP server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }

    /// Log the loaded configuration.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  BIND_ADDR : {}", self.bind_addr);
        tracing::info!("  PORT      : {}", self.port);
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-global; serialize tests touching them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<T>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> T) -> T {
        // ---
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for (k, v) in vars {
            match v {
                Some(v) => env::set_var(k, v),
                None => env::remove_var(k),
            }
        }
        let out = f();
        for (k, _) in vars {
            env::remove_var(k);
        }
        out
    }

    #[test]
    fn test_defaults() {
        // ---
        let cfg = with_env(&[("BIND_ADDR", None), ("PORT", None)], load_from_env).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn test_overrides() {
        // ---
        let cfg = with_env(
            &[("BIND_ADDR", Some("127.0.0.1")), ("PORT", Some("9090"))],
            load_from_env,
        )
        .unwrap();
        assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:9090");
    }

    #[test]
    fn test_invalid_port() {
        // ---
        let err = with_env(&[("BIND_ADDR", None), ("PORT", Some("eighty"))], load_from_env)
            .unwrap_err();
        assert!(err.to_string().contains("Invalid PORT"));

        let err = with_env(&[("BIND_ADDR", None), ("PORT", Some("70000"))], load_from_env)
            .unwrap_err();
        assert!(err.to_string().contains("Invalid PORT"));
    }

    #[test]
    fn test_invalid_bind_addr() {
        // ---
        let err = with_env(&[("BIND_ADDR", Some("not-an-ip")), ("PORT", None)], load_from_env)
            .unwrap_err();
        assert!(err.to_string().contains("Invalid BIND_ADDR"));
    }
}

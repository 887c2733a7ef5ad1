//! # Application Configuration
//!
//! This module manages application configuration loaded from environment
//! variables. All configuration is validated on startup to fail fast if
//! misconfigured.
//!
//! ## Global Config Access
//!
//! Use [`core_config()`] to access the global configuration instance:
//!
//! ```rust,no_run
//! use lib_core::config::core_config;
//!
//! let config = core_config();
//! let endpoint = &config.subgraph_url;
//! ```
//!
//! The config must be initialized once at application startup using
//! [`init_config()`].

use std::env;
use std::sync::OnceLock;

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// GraphQL endpoint of the stream-swap subgraph
    pub subgraph_url: String,

    /// Settlement pool address to submit flow updates against
    ///
    /// Optional: when absent, callers fall back to the first pool the
    /// subgraph reports.
    pub pool_address: Option<String>,

    /// HTTP request timeout in seconds for collaborator calls
    ///
    /// Valid range: 1-120 seconds.
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let subgraph_url =
            env::var("SUBGRAPH_URL").map_err(|_| "SUBGRAPH_URL must be set in environment")?;

        let pool_address = env::var("POOL_ADDRESS").ok().filter(|v| !v.trim().is_empty());

        let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|e| format!("HTTP_TIMEOUT_SECS must be a valid number: {}", e))?;

        Ok(Self {
            subgraph_url,
            pool_address,
            http_timeout_secs,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if !self.subgraph_url.starts_with("http://") && !self.subgraph_url.starts_with("https://") {
            return Err("SUBGRAPH_URL must be an http(s) URL".to_string());
        }

        if let Some(pool) = &self.pool_address {
            lib_utils::validate_address(pool)
                .map_err(|e| format!("POOL_ADDRESS invalid: {}", e))?;
        }

        if self.http_timeout_secs < 1 || self.http_timeout_secs > 120 {
            return Err("HTTP_TIMEOUT_SECS must be between 1 and 120".to_string());
        }

        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration.
///
/// This should be called once at application startup, before any services
/// that need configuration are used.
///
/// # Errors
///
/// Returns an error if:
/// - Environment variables are missing or invalid
/// - Configuration validation fails
/// - Config has already been initialized
pub fn init_config() -> Result<(), String> {
    let config = Config::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| "Config has already been initialized".to_string())
}

/// Get a reference to the global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not been called yet. This ensures
/// configuration is always available when accessed.
pub fn core_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Config must be initialized with init_config() before use")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = Config {
            subgraph_url: "ftp://example.com".to_string(),
            pool_address: None,
            http_timeout_secs: 10,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_pool() {
        let config = Config {
            subgraph_url: "https://api.thegraph.com/subgraphs/name/streamswap".to_string(),
            pool_address: Some("not-an-address".to_string()),
            http_timeout_secs: 10,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_good_config() {
        let config = Config {
            subgraph_url: "https://api.thegraph.com/subgraphs/name/streamswap".to_string(),
            pool_address: Some("0x1111111111111111111111111111111111111111".to_string()),
            http_timeout_secs: 10,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_timeout_bounds() {
        let mut config = Config {
            subgraph_url: "https://example.com".to_string(),
            pool_address: None,
            http_timeout_secs: 0,
        };
        assert!(config.validate().is_err());
        config.http_timeout_secs = 121;
        assert!(config.validate().is_err());
    }
}

//! # Runtime Configuration Module
//!
//! Sizing knobs for the navigation engine, loaded from environment variables
//! or from a TOML document.
//!
//! ## Environment Variables
//!
//! ### `NAVROUTER_MAX_HISTORY`
//!
//! Maximum number of history entries a router keeps. Default: `100`.
//!
//! ### `NAVROUTER_CACHE_SIZE`
//!
//! Capacity of a [`NavigationCache`](crate::cache::NavigationCache).
//! Default: `10`.
//!
//! ### `NAVROUTER_RATE_LIMIT_MS`
//!
//! Minimum interval between navigations enforced by
//! [`RateLimitMiddleware`](crate::middleware::RateLimitMiddleware).
//! Default: `300`.
//!
//! Unparseable or zero values fall back to the defaults.
//!
//! ## TOML
//!
//! ```toml
//! max_history_size = 50
//! cache_capacity = 20
//! rate_limit_interval_ms = 250
//! ```
//!
//! Missing keys take their defaults; a zero size is rejected.
//!
//! ## Usage
//!
//! ```rust
//! use navrouter::runtime_config::RouterConfig;
//!
//! let config = RouterConfig::from_toml_str("max_history_size = 5").unwrap();
//! assert_eq!(config.max_history_size, 5);
//! assert_eq!(config.cache_capacity, 10);
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_MAX_HISTORY_SIZE: usize = crate::history::DEFAULT_MAX_HISTORY_SIZE;
pub const DEFAULT_CACHE_CAPACITY: usize = 10;
pub const DEFAULT_RATE_LIMIT_MS: u64 = 300;

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RouterConfig {
    /// History entries kept per router (default: 100)
    pub max_history_size: usize,
    /// Artifacts kept per navigation cache (default: 10)
    pub cache_capacity: usize,
    /// Minimum spacing between rate-limited navigations in ms (default: 300)
    pub rate_limit_interval_ms: u64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            max_history_size: DEFAULT_MAX_HISTORY_SIZE,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            rate_limit_interval_ms: DEFAULT_RATE_LIMIT_MS,
        }
    }
}

impl RouterConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_history_size: parse_nonzero("NAVROUTER_MAX_HISTORY")
                .unwrap_or(DEFAULT_MAX_HISTORY_SIZE),
            cache_capacity: parse_nonzero("NAVROUTER_CACHE_SIZE")
                .unwrap_or(DEFAULT_CACHE_CAPACITY),
            rate_limit_interval_ms: env::var("NAVROUTER_RATE_LIMIT_MS")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_RATE_LIMIT_MS),
        }
    }

    /// Parse configuration from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: RouterConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    #[must_use]
    pub fn rate_limit_interval(&self) -> Duration {
        Duration::from_millis(self.rate_limit_interval_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_history_size == 0 {
            return Err(ConfigError::Invalid {
                field: "max_history_size",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.cache_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "cache_capacity",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_nonzero(var: &str) -> Option<usize> {
    env::var(var)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = RouterConfig::default();
        assert_eq!(config.max_history_size, 100);
        assert_eq!(config.cache_capacity, 10);
        assert_eq!(config.rate_limit_interval(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_toml_takes_defaults() {
        let config = RouterConfig::from_toml_str("cache_capacity = 3").unwrap();
        assert_eq!(config.cache_capacity, 3);
        assert_eq!(config.max_history_size, DEFAULT_MAX_HISTORY_SIZE);
    }

    #[test]
    fn test_zero_history_is_rejected() {
        let err = RouterConfig::from_toml_str("max_history_size = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "max_history_size",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_key_is_a_parse_error() {
        let err = RouterConfig::from_toml_str("history = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_history_size = 7\nrate_limit_interval_ms = 50").unwrap();
        let config = RouterConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_history_size, 7);
        assert_eq!(config.rate_limit_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = RouterConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}

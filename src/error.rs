//! Error types for deep linking and configuration.
//!
//! Navigation itself never fails from the caller's point of view: a denied or
//! superseded push simply does not happen (see
//! [`NavigationOutcome`](crate::router::NavigationOutcome)). Only deep-link
//! resolution and configuration loading return errors.

use thiserror::Error;
use url::Url;

/// Errors returned by [`DeepLinkCoordinator`](crate::deep_link::DeepLinkCoordinator)
/// and [`DeepLinkBuilder`](crate::deep_link::DeepLinkBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeepLinkError {
    /// No registered parser accepted the URL
    #[error("No parser found for URL: {0}")]
    NoParserFound(Url),

    /// The selected parser produced no routes
    #[error("Failed to parse URL: {url}{}", .reason.as_ref().map(|r| format!(". Reason: {r}")).unwrap_or_default())]
    ParsingFailed {
        url: Url,
        reason: Option<String>,
    },

    /// Navigation for this URL was superseded before it was dispatched
    #[error("Navigation cancelled for URL: {0}")]
    NavigationCancelled(Url),

    /// The input could not be turned into a URL
    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),
}

/// Errors raised while loading a [`RouterConfig`](crate::runtime_config::RouterConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

//! # Deep Link Module
//!
//! Turns external URLs into in-app navigation.
//!
//! A [`DeepLinkCoordinator`] owns an ordered list of [`DeepLinkParser`]s. For
//! each URL the first parser whose `can_handle` accepts it produces a list of
//! routes, which the coordinator replays onto its [`Router`](crate::router::Router):
//!
//! ```mermaid
//! sequenceDiagram
//!     participant App
//!     participant Coordinator
//!     participant Parser
//!     participant Router
//!
//!     App->>Coordinator: handle(url)
//!     Coordinator->>Parser: can_handle(url)?
//!     Parser-->>Coordinator: true
//!     Coordinator->>Parser: parse(url)
//!     Parser-->>Coordinator: [Home, Profile(42)]
//!     Coordinator->>Router: dismiss_all(), pop_to_root()
//!     loop each route
//!         Coordinator->>Router: push / present_* (awaited)
//!     end
//! ```
//!
//! Built-in parsers:
//!
//! - [`PathBasedParser`] - ordered `:param` path patterns, optional scheme and
//!   host filters
//! - [`CustomSchemeParser`] - any URL with a given scheme
//! - [`UniversalLinkParser`] - `https` URLs on one host
//!
//! [`DeepLinkBuilder`] produces URLs in the other direction.

mod builder;
mod coordinator;
mod custom_scheme;
mod parser;
mod path_based;
mod pattern;
mod universal;

pub use builder::DeepLinkBuilder;
pub use coordinator::{DeepLinkCoordinator, DeepLinkReplay};
pub use custom_scheme::CustomSchemeParser;
pub use parser::{query_parameters, DeepLinkParser};
pub use path_based::PathBasedParser;
pub use pattern::{PathPattern, Segment};
pub use universal::UniversalLinkParser;

//! # navrouter
//!
//! **navrouter** is the navigation engine of a tree-structured UI application. It tracks where
//! the user is, mediates transitions between screens, lets policy veto a transition before it
//! completes, tells interested parties after it completes, and turns external deep links into
//! in-app navigation.
//!
//! Rendering is somebody else's job: the engine exposes its state through `tokio::sync::watch`
//! channels and the rendering layer redraws from them.
//!
//! ## Architecture
//!
//! - **[`route`]** - The [`Route`] contract implemented by the application's route type
//! - **[`router`]** - The [`Router`] state machine: route stack, sheet / full-screen / popover
//!   slots, bounded history, single pending navigation
//! - **[`interceptor`]** - Async policy checks that can deny a navigation
//! - **[`observer`]** - Synchronous post-navigation notifications
//! - **[`middleware`]** - Async hooks around every approved navigation
//! - **[`deep_link`]** - Parsers, `:param` path patterns and the [`DeepLinkCoordinator`]
//! - **[`cache`]** - Thread-safe LRU cache for rendered artifacts
//! - **[`history`]** - Navigation history entries
//! - **[`runtime_config`]** - Sizing knobs from the environment or TOML
//! - **[`telemetry`]** - `tracing` subscriber setup
//! - **[`cli`]** - The `navrouter` command-line tools
//!
//! ### Navigation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant App
//!     participant Router
//!     participant Interceptors
//!     participant Middleware
//!     participant Observers
//!     participant UI as Rendering layer
//!
//!     App->>Router: push(route)
//!     Router-->>App: PendingNavigation (returns immediately)
//!     Router->>Interceptors: should_navigate(route, Push)
//!     Interceptors-->>Router: true
//!     Router->>Middleware: before_navigation
//!     Router->>Router: stack.push(route), record history
//!     Router-->>UI: watch channel update
//!     Router->>Observers: on_event(Navigated)
//!     Router->>Middleware: after_navigation
//! ```
//!
//! A second `push` issued while the first is still awaiting its interceptors supersedes it:
//! the first navigation is abandoned and leaves no trace.
//!
//! ## Quick Start
//!
//! ```rust
//! use navrouter::{Router, Route, NavigationOutcome};
//! use navrouter::interceptor::AuthInterceptor;
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! enum AppRoute {
//!     Home,
//!     Account,
//! }
//!
//! impl Route for AppRoute {
//!     fn key(&self) -> String {
//!         match self {
//!             AppRoute::Home => "home".into(),
//!             AppRoute::Account => "account".into(),
//!         }
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let router = Router::new(100);
//! router.add_interceptor(AuthInterceptor::new(|| false, ["account"]));
//!
//! assert_eq!(router.push(AppRoute::Home).finished().await, NavigationOutcome::Completed);
//! assert_eq!(router.push(AppRoute::Account).finished().await, NavigationOutcome::Denied);
//! assert_eq!(router.state().stack, vec![AppRoute::Home]);
//! # }
//! ```
//!
//! ## Deep Links
//!
//! ```rust
//! use navrouter::{DeepLinkCoordinator, PathBasedParser, Route, Router};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! enum AppRoute {
//!     Home,
//!     Profile(String),
//! }
//!
//! impl Route for AppRoute {
//!     fn key(&self) -> String {
//!         format!("{self:?}")
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let router = Router::new(100);
//! let mut coordinator = DeepLinkCoordinator::new(router.clone());
//!
//! let mut parser = PathBasedParser::new().with_scheme("myapp");
//! parser.register("/profile/:id", |params| {
//!     Some(vec![AppRoute::Home, AppRoute::Profile(params.get("id")?.clone())])
//! });
//! coordinator.register(parser);
//!
//! let replay = coordinator.handle_str("myapp://app/profile/42").unwrap();
//! replay.finished().await.unwrap();
//! assert_eq!(router.stack_depth(), 2);
//! # }
//! ```
//!
//! ## Logging
//!
//! Every component logs through `tracing`. Call [`telemetry::init_logging`] once at startup
//! (or install your own subscriber) to see the output.

pub mod cache;
pub mod cli;
pub mod deep_link;
pub mod error;
pub mod history;
pub mod ids;
pub mod interceptor;
pub mod middleware;
pub mod observer;
pub mod route;
pub mod router;
pub mod runtime_config;
pub mod telemetry;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use cache::{CacheStats, NavigationCache};
pub use deep_link::{DeepLinkCoordinator, DeepLinkParser, PathBasedParser};
pub use error::{ConfigError, DeepLinkError};
pub use history::{NavigationHistoryEntry, NavigationKind};
pub use interceptor::NavigationInterceptor;
pub use middleware::NavigationMiddleware;
pub use observer::{NavigationEvent, NavigationObserver};
pub use route::{PresentationType, Route};
pub use router::{NavigationOutcome, Router, RouterState};
pub use runtime_config::RouterConfig;

//! # CLI Module
//!
//! Command-line tools for working with deep links and router configuration
//! outside an application.
//!
//! ## Commands
//!
//! ### `match`
//!
//! Match a URL against path patterns, first match wins:
//!
//! ```bash
//! navrouter match -p /home -p /user/:id "myapp://app/user/42?tab=posts"
//! ```
//!
//! prints
//!
//! ```json
//! {
//!   "params": {
//!     "id": "42",
//!     "tab": "posts"
//!   },
//!   "pattern": "/user/:id"
//! }
//! ```
//!
//! ### `build`
//!
//! ```bash
//! navrouter build --scheme myapp --host profile --path /42 -q tab=posts
//! # myapp://profile/42?tab=posts
//! ```
//!
//! ### `config`
//!
//! Print the effective [`RouterConfig`](crate::runtime_config::RouterConfig),
//! from `--file <TOML>` or from the environment:
//!
//! ```bash
//! NAVROUTER_MAX_HISTORY=50 navrouter config
//! ```
//!
//! Pass `-v` to any command to emit logs (see [`telemetry`](crate::telemetry)).

mod commands;


pub use commands::{execute, run_cli, Cli, Commands};

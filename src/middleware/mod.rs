//! # Middleware Module
//!
//! Middleware wraps approved, gated navigations (`push` and the `present_*`
//! family) with asynchronous `before`/`after` hooks. Hooks run in
//! registration order. They observe; they never gate.
//!
//! ```text
//! interceptors ─▶ supersession check ─▶ before_navigation* ─▶ supersession check
//!              ─▶ mutate + record + observers ─▶ after_navigation*
//! ```

mod core;
mod performance;
mod rate_limit;

pub use core::NavigationMiddleware;
pub use performance::PerformanceMiddleware;
pub use rate_limit::RateLimitMiddleware;

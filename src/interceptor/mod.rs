//! # Interceptor Module
//!
//! Interceptors are asynchronous gates consulted before a push or a modal
//! presentation is applied. They are evaluated strictly in registration order
//! and evaluation stops at the first denial, so an earlier interceptor can
//! protect a later one (an auth check runs before a rate-limit check spends
//! its budget).
//!
//! ## Built-in interceptors
//!
//! - [`AuthInterceptor`] - denies protected routes while unauthenticated
//! - [`ConfirmationInterceptor`] - asks an async confirmation handler
//! - [`SecurityInterceptor`] - blocklist plus an async security check
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use navrouter::history::NavigationKind;
//! use navrouter::interceptor::NavigationInterceptor;
//! use navrouter::route::Route;
//!
//! struct DenyModals;
//!
//! #[async_trait]
//! impl<R: Route> NavigationInterceptor<R> for DenyModals {
//!     async fn should_navigate(&self, _route: &R, kind: NavigationKind) -> bool {
//!         kind == NavigationKind::Push
//!     }
//! }
//! ```

mod auth;
mod confirmation;
mod security;

pub use auth::AuthInterceptor;
pub use confirmation::ConfirmationInterceptor;
pub use security::SecurityInterceptor;

use async_trait::async_trait;
use futures::future::BoxFuture;
use std::sync::Arc;

use crate::history::NavigationKind;
use crate::route::Route;

/// Async predicate over a route key, used by the built-in interceptors.
pub type AsyncKeyCheck = Arc<dyn Fn(String) -> BoxFuture<'static, bool> + Send + Sync>;

/// Asynchronous gate for a pending navigation.
#[async_trait]
pub trait NavigationInterceptor<R: Route>: Send + Sync {
    /// Return `false` to deny the navigation.
    async fn should_navigate(&self, route: &R, kind: NavigationKind) -> bool;
}

/// Evaluate `interceptors` in order, short-circuiting on the first denial.
pub async fn should_navigate<R: Route>(
    interceptors: &[Arc<dyn NavigationInterceptor<R>>],
    route: &R,
    kind: NavigationKind,
) -> bool {
    for interceptor in interceptors {
        if !interceptor.should_navigate(route, kind).await {
            return false;
        }
    }
    true
}

use async_trait::async_trait;
use std::sync::Arc;

use crate::history::NavigationKind;
use crate::route::Route;

/// Informational hooks around an approved navigation.
///
/// Middleware cannot deny a navigation. Awaiting inside a hook delays the
/// navigation it participates in, nothing more: a newer navigation still
/// supersedes it and a superseded navigation never reaches `after_navigation`.
#[async_trait]
pub trait NavigationMiddleware<R: Route>: Send + Sync {
    async fn before_navigation(&self, _route: &R, _kind: NavigationKind) {}
    async fn after_navigation(&self, _route: &R, _kind: NavigationKind) {}
}

/// Lets a caller keep a handle to middleware it registered, e.g. to read
/// [`PerformanceMiddleware`](super::PerformanceMiddleware) measurements.
#[async_trait]
impl<R: Route, M: NavigationMiddleware<R> + ?Sized> NavigationMiddleware<R> for Arc<M> {
    async fn before_navigation(&self, route: &R, kind: NavigationKind) {
        (**self).before_navigation(route, kind).await;
    }

    async fn after_navigation(&self, route: &R, kind: NavigationKind) {
        (**self).after_navigation(route, kind).await;
    }
}

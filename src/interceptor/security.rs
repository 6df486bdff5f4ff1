use async_trait::async_trait;
use futures::future::BoxFuture;
use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use tracing::warn;

use super::{AsyncKeyCheck, NavigationInterceptor};
use crate::history::NavigationKind;
use crate::route::Route;

/// Blocklist plus an optional asynchronous security check.
///
/// The blocklist is consulted first; blocked routes never reach the check.
pub struct SecurityInterceptor {
    blocked_routes: HashSet<String>,
    security_check: AsyncKeyCheck,
}

impl SecurityInterceptor {
    /// Blocklist only; every other route passes.
    pub fn with_blocklist<I, S>(blocked_routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blocked_routes: blocked_routes.into_iter().map(Into::into).collect(),
            security_check: Arc::new(|_| -> BoxFuture<'static, bool> { Box::pin(async { true }) }),
        }
    }

    /// Replace the security check run for routes that are not blocklisted.
    #[must_use]
    pub fn security_check<C, Fut>(mut self, check: C) -> Self
    where
        C: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        self.security_check = Arc::new(move |key| -> BoxFuture<'static, bool> { Box::pin(check(key)) });
        self
    }
}

impl Default for SecurityInterceptor {
    fn default() -> Self {
        Self::with_blocklist(Vec::<String>::new())
    }
}

#[async_trait]
impl<R: Route> NavigationInterceptor<R> for SecurityInterceptor {
    async fn should_navigate(&self, route: &R, kind: NavigationKind) -> bool {
        let key = route.key();
        if self.blocked_routes.contains(&key) {
            warn!(route = %key, kind = %kind, "Navigation blocked: route is in blocklist");
            return false;
        }
        let secure = (self.security_check)(key.clone()).await;
        if !secure {
            warn!(route = %key, kind = %kind, "Navigation blocked: security check failed");
        }
        secure
    }
}

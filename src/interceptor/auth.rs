use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

use super::NavigationInterceptor;
use crate::history::NavigationKind;
use crate::route::Route;

/// Denies protected routes while the user is not authenticated.
///
/// Routes are matched by [`Route::key`].
pub struct AuthInterceptor {
    is_authenticated: Arc<dyn Fn() -> bool + Send + Sync>,
    protected_routes: HashSet<String>,
}

impl AuthInterceptor {
    pub fn new<F, I, S>(is_authenticated: F, protected_routes: I) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            is_authenticated: Arc::new(is_authenticated),
            protected_routes: protected_routes.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl<R: Route> NavigationInterceptor<R> for AuthInterceptor {
    async fn should_navigate(&self, route: &R, kind: NavigationKind) -> bool {
        let key = route.key();
        if self.protected_routes.contains(&key) && !(self.is_authenticated)() {
            warn!(route = %key, kind = %kind, "Navigation blocked: user not authenticated");
            return false;
        }
        true
    }
}

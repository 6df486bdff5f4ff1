use async_trait::async_trait;
use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

use super::{AsyncKeyCheck, NavigationInterceptor};
use crate::history::NavigationKind;
use crate::route::Route;

/// Asks for confirmation before navigating to selected routes.
///
/// `should_confirm` decides synchronously whether a route needs confirmation;
/// if so, the navigation waits for `confirm` (e.g. a dialog) to resolve.
pub struct ConfirmationInterceptor {
    should_confirm: Arc<dyn Fn(&str) -> bool + Send + Sync>,
    confirm: AsyncKeyCheck,
}

impl ConfirmationInterceptor {
    pub fn new<P, C, Fut>(should_confirm: P, confirm: C) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
        C: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        Self {
            should_confirm: Arc::new(should_confirm),
            confirm: Arc::new(move |key| -> BoxFuture<'static, bool> { Box::pin(confirm(key)) }),
        }
    }
}

#[async_trait]
impl<R: Route> NavigationInterceptor<R> for ConfirmationInterceptor {
    async fn should_navigate(&self, route: &R, kind: NavigationKind) -> bool {
        let key = route.key();
        if !(self.should_confirm)(&key) {
            return true;
        }
        let confirmed = (self.confirm)(key.clone()).await;
        debug!(route = %key, kind = %kind, confirmed, "Navigation confirmation resolved");
        confirmed
    }
}

use async_trait::async_trait;
use parking_lot::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

use super::NavigationMiddleware;
use crate::history::NavigationKind;
use crate::route::Route;
use crate::runtime_config::RouterConfig;

/// Spaces navigations at least `minimum_interval` apart.
///
/// `before_navigation` sleeps for whatever is left of the interval since the
/// last completed navigation; `after_navigation` stamps the completion time.
#[derive(Debug)]
pub struct RateLimitMiddleware {
    minimum_interval: Duration,
    last_navigation: Mutex<Option<Instant>>,
}

impl RateLimitMiddleware {
    pub fn new(minimum_interval: Duration) -> Self {
        Self {
            minimum_interval,
            last_navigation: Mutex::new(None),
        }
    }

    pub fn from_config(config: &RouterConfig) -> Self {
        Self::new(config.rate_limit_interval())
    }

    #[must_use]
    pub fn minimum_interval(&self) -> Duration {
        self.minimum_interval
    }
}

impl Default for RateLimitMiddleware {
    fn default() -> Self {
        Self::from_config(&RouterConfig::default())
    }
}

#[async_trait]
impl<R: Route> NavigationMiddleware<R> for RateLimitMiddleware {
    async fn before_navigation(&self, route: &R, kind: NavigationKind) {
        let last = *self.last_navigation.lock();
        let Some(last) = last else {
            return;
        };
        let elapsed = last.elapsed();
        if elapsed < self.minimum_interval {
            let delay = self.minimum_interval - elapsed;
            debug!(
                route = %route.key(),
                kind = %kind,
                delay_ms = delay.as_millis(),
                "Rate limiting navigation"
            );
            tokio::time::sleep(delay).await;
        }
    }

    async fn after_navigation(&self, _route: &R, _kind: NavigationKind) {
        *self.last_navigation.lock() = Some(Instant::now());
    }
}

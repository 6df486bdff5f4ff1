use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::info;

use super::NavigationMiddleware;
use crate::history::NavigationKind;
use crate::route::Route;

/// Measures how long each approved navigation spends between the
/// `before` and `after` hooks.
#[derive(Debug, Default)]
pub struct PerformanceMiddleware {
    started: Mutex<HashMap<String, Instant>>,
    last: Mutex<Option<(String, Duration)>>,
}

impl PerformanceMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently measured navigation as `(route key, duration)`.
    #[must_use]
    pub fn last_measurement(&self) -> Option<(String, Duration)> {
        self.last.lock().clone()
    }

    /// Navigations that entered `before` and have not reached `after` yet.
    ///
    /// At most one per router: a navigation superseded between the hooks is
    /// dropped when the next one enters `before`.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.started.lock().len()
    }
}

#[async_trait]
impl<R: Route> NavigationMiddleware<R> for PerformanceMiddleware {
    async fn before_navigation(&self, route: &R, _kind: NavigationKind) {
        let mut started = self.started.lock();
        started.clear();
        started.insert(route.key(), Instant::now());
    }

    async fn after_navigation(&self, route: &R, kind: NavigationKind) {
        let key = route.key();
        let Some(start) = self.started.lock().remove(&key) else {
            return;
        };
        let duration = start.elapsed();
        info!(
            route = %key,
            kind = %kind,
            duration_us = duration.as_micros(),
            "Navigation timing"
        );
        *self.last.lock() = Some((key, duration));
    }
}

use serde_json::{Map, Value};
use std::sync::Arc;

use super::{NavigationEvent, NavigationObserver};
use crate::route::Route;

/// Analytics event name emitted for every approved navigation
pub const SCREEN_VIEW_EVENT: &str = "screen_view";

/// Forwards screen views to an analytics sink.
///
/// Only [`NavigationEvent::Navigated`] is reported; pops and dismissals are
/// ignored. The payload carries `screen_name` (the route key) and
/// `navigation_type`.
///
/// ```rust
/// use navrouter::observer::AnalyticsObserver;
///
/// let observer = AnalyticsObserver::new(|event, params| {
///     println!("{event}: {}", serde_json::Value::Object(params.clone()));
/// });
/// # let _ = observer;
/// ```
#[derive(Clone)]
pub struct AnalyticsObserver {
    sink: Arc<dyn Fn(&str, &Map<String, Value>) + Send + Sync>,
}

impl AnalyticsObserver {
    pub fn new<F>(sink: F) -> Self
    where
        F: Fn(&str, &Map<String, Value>) + Send + Sync + 'static,
    {
        Self {
            sink: Arc::new(sink),
        }
    }
}

impl<R: Route> NavigationObserver<R> for AnalyticsObserver {
    fn on_event(&self, event: &NavigationEvent<R>) {
        if let NavigationEvent::Navigated { route, kind } = event {
            let mut params = Map::new();
            params.insert("screen_name".to_string(), Value::String(route.key()));
            params.insert(
                "navigation_type".to_string(),
                Value::String(kind.as_str().to_string()),
            );
            (self.sink)(SCREEN_VIEW_EVENT, &params);
        }
    }
}

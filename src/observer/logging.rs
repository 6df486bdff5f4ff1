use tracing::info;

use super::{NavigationEvent, NavigationObserver};
use crate::route::Route;

/// Logs every navigation event through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl LoggingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl<R: Route> NavigationObserver<R> for LoggingObserver {
    fn on_event(&self, event: &NavigationEvent<R>) {
        match event {
            NavigationEvent::Navigated { route, kind } => {
                info!(route = %route.key(), kind = %kind, "Navigation");
            }
            NavigationEvent::Popped => info!("Navigation: pop"),
            NavigationEvent::PoppedToRoot => info!("Navigation: pop to root"),
            NavigationEvent::SheetDismissed => info!("Navigation: dismiss sheet"),
            NavigationEvent::FullScreenDismissed => info!("Navigation: dismiss full screen"),
            NavigationEvent::AllDismissed => info!("Navigation: dismiss all"),
        }
    }
}

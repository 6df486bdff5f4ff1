//! # Observer Module
//!
//! Observers receive synchronous, post-hoc notifications after the router has
//! mutated its state. They cannot influence navigation and must not block.
//!
//! Which operations notify is part of the router's contract:
//!
//! | Operation                        | Event                         |
//! |----------------------------------|-------------------------------|
//! | `push` / `present_*` (approved)  | [`NavigationEvent::Navigated`] |
//! | `pop`                            | [`NavigationEvent::Popped`]    |
//! | `pop_to_root`                    | [`NavigationEvent::PoppedToRoot`] |
//! | `dismiss_sheet`                  | [`NavigationEvent::SheetDismissed`] |
//! | `dismiss_full_screen`            | [`NavigationEvent::FullScreenDismissed`] |
//! | `dismiss_all`                    | [`NavigationEvent::AllDismissed`] |
//!
//! `pop_count`, `dismiss_popover`, `replace` and `navigate` do not notify.

mod analytics;
mod logging;

pub use analytics::AnalyticsObserver;
pub use logging::LoggingObserver;

use crate::history::NavigationKind;
use crate::route::Route;

/// Notification delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent<R> {
    Navigated { route: R, kind: NavigationKind },
    Popped,
    PoppedToRoot,
    SheetDismissed,
    FullScreenDismissed,
    AllDismissed,
}

/// Synchronous navigation notification sink.
pub trait NavigationObserver<R: Route>: Send + Sync {
    fn on_event(&self, event: &NavigationEvent<R>);
}

impl<R, F> NavigationObserver<R> for F
where
    R: Route,
    F: Fn(&NavigationEvent<R>) + Send + Sync,
{
    fn on_event(&self, event: &NavigationEvent<R>) {
        self(event);
    }
}

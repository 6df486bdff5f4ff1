//! Test double for code that drives navigation.
//!
//! [`MockRouter`] applies every operation immediately, without interceptors,
//! observers or a runtime, and tracks what was asked of it so tests can
//! assert on intent rather than on rendered state.
//!
//! Available in this crate's own tests and, for downstream crates, behind the
//! `testing` feature.

use crate::history::{NavigationHistory, NavigationHistoryEntry, NavigationKind};
use crate::route::Route;
use crate::router::RouterState;

/// Synchronous, ungated stand-in for [`Router`](crate::router::Router).
#[derive(Debug, Clone)]
pub struct MockRouter<R: Route> {
    state: RouterState<R>,
    history: NavigationHistory,
    pushed_routes: Vec<R>,
    popped_count: usize,
    presented_sheets: Vec<R>,
    dismissed_sheets_count: usize,
}

impl<R: Route> Default for MockRouter<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Route> MockRouter<R> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RouterState::default(),
            history: NavigationHistory::default(),
            pushed_routes: Vec::new(),
            popped_count: 0,
            presented_sheets: Vec::new(),
            dismissed_sheets_count: 0,
        }
    }

    pub fn push(&mut self, route: R) {
        self.record(Some(&route), NavigationKind::Push);
        self.pushed_routes.push(route.clone());
        self.state.stack.push(route);
    }

    /// Counts the call even when the stack is empty.
    pub fn pop(&mut self) {
        self.popped_count += 1;
        self.state.stack.pop();
        self.record(None, NavigationKind::Pop);
    }

    pub fn pop_to_root(&mut self) {
        self.popped_count += self.state.stack.len();
        self.state.stack.clear();
        self.record(None, NavigationKind::PopToRoot);
    }

    pub fn present_sheet(&mut self, route: R) {
        self.record(Some(&route), NavigationKind::PresentSheet);
        self.presented_sheets.push(route.clone());
        self.state.sheet = Some(route);
    }

    pub fn dismiss_sheet(&mut self) {
        self.dismissed_sheets_count += 1;
        self.state.sheet = None;
        self.record(None, NavigationKind::DismissSheet);
    }

    pub fn present_full_screen(&mut self, route: R) {
        self.record(Some(&route), NavigationKind::PresentFullScreen);
        self.state.full_screen_cover = Some(route);
    }

    pub fn dismiss_full_screen(&mut self) {
        self.state.full_screen_cover = None;
        self.record(None, NavigationKind::DismissFullScreen);
    }

    pub fn present_popover(&mut self, route: R) {
        self.record(Some(&route), NavigationKind::PresentPopover);
        self.state.popover = Some(route);
    }

    pub fn dismiss_popover(&mut self) {
        self.state.popover = None;
    }

    pub fn dismiss_all(&mut self) {
        self.state.sheet = None;
        self.state.full_screen_cover = None;
        self.state.popover = None;
    }

    #[must_use]
    pub fn state(&self) -> &RouterState<R> {
        &self.state
    }

    #[must_use]
    pub fn history(&self) -> &[NavigationHistoryEntry] {
        self.history.entries()
    }

    #[must_use]
    pub fn pushed_routes(&self) -> &[R] {
        &self.pushed_routes
    }

    #[must_use]
    pub fn popped_count(&self) -> usize {
        self.popped_count
    }

    #[must_use]
    pub fn presented_sheets(&self) -> &[R] {
        &self.presented_sheets
    }

    #[must_use]
    pub fn dismissed_sheets_count(&self) -> usize {
        self.dismissed_sheets_count
    }

    #[must_use]
    pub fn last_pushed_route(&self) -> Option<&R> {
        self.pushed_routes.last()
    }

    #[must_use]
    pub fn did_push(&self, route: &R) -> bool {
        self.pushed_routes.contains(route)
    }

    /// Forget the tracked calls but keep state and history.
    pub fn clear_tracking(&mut self) {
        self.pushed_routes.clear();
        self.popped_count = 0;
        self.presented_sheets.clear();
        self.dismissed_sheets_count = 0;
    }

    /// Back to a freshly constructed mock.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn record(&mut self, route: Option<&R>, kind: NavigationKind) {
        self.history
            .record(NavigationHistoryEntry::new(route.map(Route::key), kind));
    }
}

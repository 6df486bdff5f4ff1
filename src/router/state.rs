use serde::Serialize;

use crate::history::NavigationHistoryEntry;
use crate::route::Route;

/// Observable navigation state: the route stack plus three independent modal
/// slots.
///
/// The stack and the slots are orthogonal. Presenting a modal never touches
/// the stack and a modal may be shown over an empty stack. Each slot holds at
/// most one route; presenting into an occupied slot replaces its occupant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterState<R> {
    /// Pushed routes, root first
    pub stack: Vec<R>,
    pub sheet: Option<R>,
    pub full_screen_cover: Option<R>,
    pub popover: Option<R>,
}

impl<R> Default for RouterState<R> {
    fn default() -> Self {
        Self {
            stack: Vec::new(),
            sheet: None,
            full_screen_cover: None,
            popover: None,
        }
    }
}

impl<R> RouterState<R> {
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Topmost pushed route
    #[must_use]
    pub fn top(&self) -> Option<&R> {
        self.stack.last()
    }

    #[must_use]
    pub fn has_modal(&self) -> bool {
        self.sheet.is_some() || self.full_screen_cover.is_some() || self.popover.is_some()
    }
}

/// Read-only diagnostics view of a router.
///
/// Routes are rendered through [`Route::key`]; history is newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugSnapshot {
    pub stack_depth: usize,
    pub stack: Vec<String>,
    pub sheet: Option<String>,
    pub full_screen_cover: Option<String>,
    pub popover: Option<String>,
    pub history: Vec<NavigationHistoryEntry>,
}

impl DebugSnapshot {
    pub(crate) fn capture<R: Route>(
        state: &RouterState<R>,
        history: Vec<NavigationHistoryEntry>,
    ) -> Self {
        Self {
            stack_depth: state.depth(),
            stack: state.stack.iter().map(Route::key).collect(),
            sheet: state.sheet.as_ref().map(Route::key),
            full_screen_cover: state.full_screen_cover.as_ref().map(Route::key),
            popover: state.popover.as_ref().map(Route::key),
            history,
        }
    }

    /// Pretty JSON rendering for logs and debug panels.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

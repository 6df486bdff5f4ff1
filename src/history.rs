//! # Navigation History
//!
//! Every state mutation the router performs is recorded as one
//! [`NavigationHistoryEntry`]. The history is a bounded FIFO: once it grows
//! past its limit the overflow is drained from the front in one step, so a
//! burst of navigations costs one `drain` rather than one shift per entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::SystemTime;

use crate::ids::EntryId;

/// Default number of entries kept by a router
pub const DEFAULT_MAX_HISTORY_SIZE: usize = 100;

/// The action that caused a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationKind {
    Push,
    Pop,
    PopToRoot,
    PresentSheet,
    PresentFullScreen,
    PresentPopover,
    DismissSheet,
    DismissFullScreen,
    DeepLink,
    Replace,
}

impl NavigationKind {
    /// Snake-case label used in logs and analytics payloads
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NavigationKind::Push => "push",
            NavigationKind::Pop => "pop",
            NavigationKind::PopToRoot => "pop_to_root",
            NavigationKind::PresentSheet => "present_sheet",
            NavigationKind::PresentFullScreen => "present_full_screen",
            NavigationKind::PresentPopover => "present_popover",
            NavigationKind::DismissSheet => "dismiss_sheet",
            NavigationKind::DismissFullScreen => "dismiss_full_screen",
            NavigationKind::DeepLink => "deep_link",
            NavigationKind::Replace => "replace",
        }
    }
}

impl fmt::Display for NavigationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationHistoryEntry {
    pub id: EntryId,
    /// Key of the route involved; absent for pop-like actions
    pub route: Option<String>,
    pub kind: NavigationKind,
    pub timestamp: SystemTime,
}

impl NavigationHistoryEntry {
    pub fn new(route: Option<String>, kind: NavigationKind) -> Self {
        Self {
            id: EntryId::generate(),
            route,
            kind,
            timestamp: SystemTime::now(),
        }
    }
}

/// Append-ordered history capped at `max_size` entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationHistory {
    entries: Vec<NavigationHistoryEntry>,
    max_size: usize,
}

impl NavigationHistory {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_size,
        }
    }

    /// Append an entry, evicting the oldest overflow in one drain.
    pub fn record(&mut self, entry: NavigationHistoryEntry) {
        self.entries.push(entry);
        if self.entries.len() > self.max_size {
            let overflow = self.entries.len() - self.max_size;
            self.entries.drain(..overflow);
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[NavigationHistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    #[must_use]
    pub fn last(&self) -> Option<&NavigationHistoryEntry> {
        self.entries.last()
    }

    /// Newest first, for diagnostics views
    #[must_use]
    pub fn reversed(&self) -> Vec<NavigationHistoryEntry> {
        self.entries.iter().rev().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY_SIZE)
    }
}

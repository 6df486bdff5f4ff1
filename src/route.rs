//! # Route Contract
//!
//! Routes are produced by the embedding application. The engine never looks
//! inside a route: it compares routes, hashes them, clones them into the
//! stack and the modal slots, and projects them to a stable string key.
//!
//! The key is what shows up everywhere a route has to be named without being
//! held: history labels, cache keys, blocklists and protected-route sets.
//!
//! ## Example
//!
//! ```rust
//! use navrouter::route::{PresentationType, Route};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! enum AppRoute {
//!     Home,
//!     Profile { user_id: String },
//!     Settings,
//! }
//!
//! impl Route for AppRoute {
//!     fn key(&self) -> String {
//!         match self {
//!             AppRoute::Home => "home".to_string(),
//!             AppRoute::Profile { user_id } => format!("profile_{user_id}"),
//!             AppRoute::Settings => "settings".to_string(),
//!         }
//!     }
//!
//!     fn presentation(&self) -> PresentationType {
//!         match self {
//!             AppRoute::Settings => PresentationType::Sheet,
//!             _ => PresentationType::Push,
//!         }
//!     }
//! }
//!
//! assert_eq!(AppRoute::Home.key(), "home");
//! assert_eq!(AppRoute::Settings.presentation(), PresentationType::Sheet);
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;

/// Opaque hint handed to the rendering collaborator for custom transitions.
///
/// The engine only carries it; it never interprets the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionHint(pub Cow<'static, str>);

impl TransitionHint {
    /// Create a hint from a static or owned name (e.g. `"fade"`).
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// The hint name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransitionHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How a route wants to be presented when it is replayed from a deep link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PresentationType {
    /// Appended to the navigation stack
    #[default]
    Push,
    /// Modal sheet slot
    Sheet,
    /// Full-screen cover slot
    FullScreenCover,
    /// Popover slot
    Popover,
    /// Replaces the current screen
    Replace,
    /// Pushed with an application-defined transition
    Custom(TransitionHint),
}

/// A navigable destination.
///
/// Implementors must keep [`Route::key`] stable: two routes that compare equal
/// must return the same key for the lifetime of the process.
pub trait Route: Clone + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Stable string projection used for history labels, cache keys and
    /// route-name based policies.
    fn key(&self) -> String;

    /// Presentation used when the route is replayed from a deep link.
    fn presentation(&self) -> PresentationType {
        PresentationType::Push
    }

    /// Optional transition hint for the rendering collaborator.
    fn transition(&self) -> Option<TransitionHint> {
        None
    }
}

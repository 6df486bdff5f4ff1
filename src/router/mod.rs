//! # Router Module
//!
//! The router is the navigation state machine. It owns:
//!
//! - the **stack** of pushed routes (push appends at the tail, pop removes
//!   from the tail)
//! - three independent **modal slots**: sheet, full-screen cover, popover
//! - a bounded **history** of every recorded mutation
//! - ordered registries of **interceptors**, **observers** and **middleware**
//! - the single **pending-navigation** slot
//!
//! ## Gated vs. ungated operations
//!
//! | Operation               | Gated | History kind          | Observer event        |
//! |-------------------------|-------|-----------------------|-----------------------|
//! | `push`                  | yes   | `Push`                | `Navigated`           |
//! | `present_sheet`         | yes   | `PresentSheet`        | `Navigated`           |
//! | `present_full_screen`   | yes   | `PresentFullScreen`   | `Navigated`           |
//! | `present_popover`       | yes   | `PresentPopover`      | `Navigated`           |
//! | `pop`                   | no    | `Pop`                 | `Popped`              |
//! | `pop_to_root`           | no    | `PopToRoot`           | `PoppedToRoot`        |
//! | `pop_count`             | no    | `Pop`                 | -                     |
//! | `dismiss_sheet`         | no    | `DismissSheet`        | `SheetDismissed`      |
//! | `dismiss_full_screen`   | no    | `DismissFullScreen`   | `FullScreenDismissed` |
//! | `dismiss_popover`       | no    | -                     | -                     |
//! | `dismiss_all`           | no    | -                     | `AllDismissed`        |
//! | `replace`               | no    | `Replace`             | -                     |
//! | `navigate`              | no    | `DeepLink`            | -                     |
//!
//! ## Supersession
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Router
//!     participant TaskA as Approval A
//!     participant TaskB as Approval B
//!
//!     Caller->>Router: push(A)
//!     Router->>TaskA: spawn (generation 1)
//!     Caller->>Router: push(B)
//!     Router->>TaskA: abort
//!     Router->>TaskB: spawn (generation 2)
//!     TaskB->>Router: approved, generation 2 current?
//!     Router->>Router: stack.push(B), record, notify
//! ```
//!
//! Each gated navigation bumps a generation counter. Before mutating, the
//! approval task re-checks its generation under the same lock every commit
//! takes, so check-and-apply is atomic and a superseded navigation can never
//! leak an effect even if its abort races with its approval.

mod core;
mod pending;
mod state;

pub use core::Router;
pub use pending::{NavigationOutcome, PendingNavigation};
pub use state::{DebugSnapshot, RouterState};

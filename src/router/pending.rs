use tokio::task::{AbortHandle, JoinHandle};

/// How a gated navigation ended.
///
/// Callers never have to look at this: navigation is fire-and-forget and a
/// denied or superseded navigation simply does not happen. It is surfaced for
/// diagnostics and tests through [`PendingNavigation::finished`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Approved and applied
    Completed,
    /// An interceptor returned `false`
    Denied,
    /// A newer gated navigation started before this one was applied
    Superseded,
    /// The approval task could not run or panicked
    Failed,
}

/// The single pending-navigation slot of a router.
///
/// Every gated navigation bumps `generation`; an in-flight task may only
/// apply its effect while its generation is still current. The abort handle
/// is dropped once the task has committed so that superseding it later cannot
/// cut its `after_navigation` hooks short.
#[derive(Debug, Default)]
pub(crate) struct PendingSlot {
    pub(crate) generation: u64,
    pub(crate) task: Option<AbortHandle>,
}

impl PendingSlot {
    /// Start a new generation, aborting the previous uncommitted task.
    pub(crate) fn supersede(&mut self) -> u64 {
        if let Some(previous) = self.task.take() {
            previous.abort();
        }
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    #[must_use]
    pub(crate) fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

/// Handle to a gated navigation (`push` / `present_*`).
///
/// Dropping it is fine: the navigation keeps running in the background.
#[derive(Debug)]
pub struct PendingNavigation {
    handle: Option<JoinHandle<NavigationOutcome>>,
}

impl PendingNavigation {
    pub(crate) fn spawned(handle: JoinHandle<NavigationOutcome>) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    pub(crate) fn failed() -> Self {
        Self { handle: None }
    }

    /// Wait for the navigation to settle.
    pub async fn finished(self) -> NavigationOutcome {
        let Some(handle) = self.handle else {
            return NavigationOutcome::Failed;
        };
        match handle.await {
            Ok(outcome) => outcome,
            Err(err) if err.is_cancelled() => NavigationOutcome::Superseded,
            Err(_) => NavigationOutcome::Failed,
        }
    }

    /// Whether the navigation has already settled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

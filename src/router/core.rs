use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::{debug, error};

use super::pending::{NavigationOutcome, PendingNavigation, PendingSlot};
use super::state::{DebugSnapshot, RouterState};
use crate::history::{NavigationHistory, NavigationHistoryEntry, NavigationKind};
use crate::interceptor::{self, NavigationInterceptor};
use crate::middleware::NavigationMiddleware;
use crate::observer::{NavigationEvent, NavigationObserver};
use crate::route::Route;
use crate::runtime_config::RouterConfig;

type Registry<T> = ArcSwap<Vec<Arc<T>>>;
type DismissAction = Arc<dyn Fn() + Send + Sync>;

/// Navigation state machine.
///
/// Owns the route stack, the three modal slots, the bounded history and the
/// interceptor / observer / middleware registries. `Router` is a cheap handle:
/// clones share the same state.
///
/// Gated operations ([`push`](Router::push) and the `present_*` family) spawn
/// an approval task on the ambient Tokio runtime and return immediately.
/// Only one gated navigation is pending at a time; starting another one
/// supersedes it, and a superseded navigation has no observable effect.
/// Every other operation is applied synchronously and is not gated.
///
/// # Example
///
/// ```rust
/// use navrouter::route::Route;
/// use navrouter::router::{NavigationOutcome, Router};
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// enum AppRoute { Home, Settings }
///
/// impl Route for AppRoute {
///     fn key(&self) -> String { format!("{self:?}").to_lowercase() }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let router = Router::new(100);
/// let outcome = router.push(AppRoute::Home).finished().await;
/// assert_eq!(outcome, NavigationOutcome::Completed);
///
/// router.replace(AppRoute::Settings);
/// assert_eq!(router.state().stack, vec![AppRoute::Settings]);
/// # }
/// ```
pub struct Router<R: Route> {
    shared: Arc<Shared<R>>,
}

impl<R: Route> Clone for Router<R> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

struct Shared<R: Route> {
    state: watch::Sender<RouterState<R>>,
    history: watch::Sender<NavigationHistory>,
    /// Serializes every commit, gated or not
    pending: Mutex<PendingSlot>,
    interceptors: Registry<dyn NavigationInterceptor<R>>,
    observers: Registry<dyn NavigationObserver<R>>,
    middleware: Registry<dyn NavigationMiddleware<R>>,
    dismiss_action: Mutex<Option<DismissAction>>,
}

impl<R: Route> Default for Router<R> {
    fn default() -> Self {
        Self::with_config(&RouterConfig::default())
    }
}

impl<R: Route> Router<R> {
    /// Create a router keeping at most `max_history_size` history entries.
    #[must_use]
    pub fn new(max_history_size: usize) -> Self {
        let (state, _) = watch::channel(RouterState::default());
        let (history, _) = watch::channel(NavigationHistory::new(max_history_size));
        Self {
            shared: Arc::new(Shared {
                state,
                history,
                pending: Mutex::new(PendingSlot::default()),
                interceptors: ArcSwap::from_pointee(Vec::new()),
                observers: ArcSwap::from_pointee(Vec::new()),
                middleware: ArcSwap::from_pointee(Vec::new()),
                dismiss_action: Mutex::new(None),
            }),
        }
    }

    #[must_use]
    pub fn with_config(config: &RouterConfig) -> Self {
        Self::new(config.max_history_size)
    }

    // ------------------------------------------------------------------
    // Gated navigation
    // ------------------------------------------------------------------

    /// Push `route` onto the stack once every interceptor approves.
    pub fn push(&self, route: R) -> PendingNavigation {
        self.begin_gated(route, NavigationKind::Push)
    }

    /// Present `route` in the sheet slot once approved.
    pub fn present_sheet(&self, route: R) -> PendingNavigation {
        self.begin_gated(route, NavigationKind::PresentSheet)
    }

    /// Present `route` in the full-screen cover slot once approved.
    pub fn present_full_screen(&self, route: R) -> PendingNavigation {
        self.begin_gated(route, NavigationKind::PresentFullScreen)
    }

    /// Present `route` in the popover slot once approved.
    pub fn present_popover(&self, route: R) -> PendingNavigation {
        self.begin_gated(route, NavigationKind::PresentPopover)
    }

    fn begin_gated(&self, route: R, kind: NavigationKind) -> PendingNavigation {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                error!(
                    route = %route.key(),
                    kind = %kind,
                    error = %err,
                    "Gated navigation requires a Tokio runtime"
                );
                return PendingNavigation::failed();
            }
        };

        let mut slot = self.shared.pending.lock();
        let generation = slot.supersede();
        let shared = Arc::clone(&self.shared);
        let handle = runtime.spawn(async move { shared.run_gated(generation, route, kind).await });
        slot.task = Some(handle.abort_handle());
        PendingNavigation::spawned(handle)
    }

    // ------------------------------------------------------------------
    // Synchronous, ungated operations
    // ------------------------------------------------------------------

    /// Remove the topmost route. No-op on an empty stack.
    pub fn pop(&self) {
        {
            let _commit = self.shared.pending.lock();
            let popped = self.shared.state.send_if_modified(|s| s.stack.pop().is_some());
            if !popped {
                return;
            }
            self.shared.record(None, NavigationKind::Pop);
        }
        self.shared.notify(&NavigationEvent::Popped);
    }

    /// Clear the whole stack in one mutation. No-op on an empty stack.
    pub fn pop_to_root(&self) {
        {
            let _commit = self.shared.pending.lock();
            let cleared = self.shared.state.send_if_modified(|s| {
                if s.stack.is_empty() {
                    return false;
                }
                s.stack.clear();
                true
            });
            if !cleared {
                return;
            }
            self.shared.record(None, NavigationKind::PopToRoot);
        }
        self.shared.notify(&NavigationEvent::PoppedToRoot);
    }

    /// Remove up to `count` routes from the top of the stack.
    ///
    /// Records a single `Pop` entry when anything was removed. Unlike
    /// [`pop`](Router::pop) this does not notify observers.
    pub fn pop_count(&self, count: usize) {
        let _commit = self.shared.pending.lock();
        let removed = self.shared.state.send_if_modified(|s| {
            let n = count.min(s.stack.len());
            if n == 0 {
                return false;
            }
            s.stack.truncate(s.stack.len() - n);
            true
        });
        if removed {
            self.shared.record(None, NavigationKind::Pop);
        }
    }

    /// Clear the sheet slot. Always recorded and notified, even when empty.
    pub fn dismiss_sheet(&self) {
        {
            let _commit = self.shared.pending.lock();
            self.shared.state.send_if_modified(|s| s.sheet.take().is_some());
            self.shared.record(None, NavigationKind::DismissSheet);
        }
        self.shared.notify(&NavigationEvent::SheetDismissed);
    }

    /// Clear the full-screen cover slot. Always recorded and notified.
    pub fn dismiss_full_screen(&self) {
        {
            let _commit = self.shared.pending.lock();
            self.shared
                .state
                .send_if_modified(|s| s.full_screen_cover.take().is_some());
            self.shared.record(None, NavigationKind::DismissFullScreen);
        }
        self.shared.notify(&NavigationEvent::FullScreenDismissed);
    }

    /// Clear the popover slot. Neither recorded nor notified.
    pub fn dismiss_popover(&self) {
        let _commit = self.shared.pending.lock();
        self.shared.state.send_if_modified(|s| s.popover.take().is_some());
    }

    /// Clear all three modal slots in one mutation and notify once.
    pub fn dismiss_all(&self) {
        {
            let _commit = self.shared.pending.lock();
            self.shared.state.send_if_modified(|s| {
                let had_modal = s.has_modal();
                s.sheet = None;
                s.full_screen_cover = None;
                s.popover = None;
                had_modal
            });
        }
        self.shared.notify(&NavigationEvent::AllDismissed);
    }

    /// Replace the whole stack with `route`. Not gated.
    pub fn replace(&self, route: R) {
        let _commit = self.shared.pending.lock();
        let key = route.key();
        self.shared.state.send_modify(|s| {
            s.stack.clear();
            s.stack.push(route);
        });
        self.shared.record(Some(key), NavigationKind::Replace);
    }

    /// Replace the whole stack with `routes`, recording one `DeepLink` entry
    /// labelled with the last route.
    pub fn navigate(&self, routes: Vec<R>) {
        let _commit = self.shared.pending.lock();
        let label = routes.last().map(Route::key);
        self.shared.state.send_modify(|s| {
            s.stack.clear();
            s.stack.extend(routes);
        });
        self.shared.record(label, NavigationKind::DeepLink);
    }

    // ------------------------------------------------------------------
    // Registries
    // ------------------------------------------------------------------

    pub fn add_interceptor(&self, interceptor: impl NavigationInterceptor<R> + 'static) {
        let interceptor: Arc<dyn NavigationInterceptor<R>> = Arc::new(interceptor);
        append(&self.shared.interceptors, interceptor);
    }

    pub fn clear_interceptors(&self) {
        self.shared.interceptors.store(Arc::new(Vec::new()));
    }

    pub fn add_observer(&self, observer: impl NavigationObserver<R> + 'static) {
        let observer: Arc<dyn NavigationObserver<R>> = Arc::new(observer);
        append(&self.shared.observers, observer);
    }

    pub fn clear_observers(&self) {
        self.shared.observers.store(Arc::new(Vec::new()));
    }

    pub fn add_middleware(&self, middleware: impl NavigationMiddleware<R> + 'static) {
        let middleware: Arc<dyn NavigationMiddleware<R>> = Arc::new(middleware);
        append(&self.shared.middleware, middleware);
    }

    pub fn clear_middleware(&self) {
        self.shared.middleware.store(Arc::new(Vec::new()));
    }

    #[must_use]
    pub fn interceptor_count(&self) -> usize {
        self.shared.interceptors.load().len()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.shared.observers.load().len()
    }

    #[must_use]
    pub fn middleware_count(&self) -> usize {
        self.shared.middleware.load().len()
    }

    // ------------------------------------------------------------------
    // Rendering collaborator surface
    // ------------------------------------------------------------------

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> RouterState<R> {
        self.shared.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RouterState<R>> {
        self.shared.state.subscribe()
    }

    #[must_use]
    pub fn stack_depth(&self) -> usize {
        self.shared.state.borrow().depth()
    }

    #[must_use]
    pub fn sheet(&self) -> Option<R> {
        self.shared.state.borrow().sheet.clone()
    }

    #[must_use]
    pub fn full_screen_cover(&self) -> Option<R> {
        self.shared.state.borrow().full_screen_cover.clone()
    }

    #[must_use]
    pub fn popover(&self) -> Option<R> {
        self.shared.state.borrow().popover.clone()
    }

    /// History entries, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<NavigationHistoryEntry> {
        self.shared.history.borrow().entries().to_vec()
    }

    /// Receiver notified whenever an entry is recorded.
    #[must_use]
    pub fn subscribe_history(&self) -> watch::Receiver<NavigationHistory> {
        self.shared.history.subscribe()
    }

    #[must_use]
    pub fn max_history_size(&self) -> usize {
        self.shared.history.borrow().max_size()
    }

    /// Install the callback the rendering collaborator uses to dismiss its
    /// enclosing presentation context.
    pub fn set_dismiss_action(&self, action: impl Fn() + Send + Sync + 'static) {
        *self.shared.dismiss_action.lock() = Some(Arc::new(action));
    }

    pub fn clear_dismiss_action(&self) {
        *self.shared.dismiss_action.lock() = None;
    }

    /// Run the installed dismiss action. Returns `false` when none is set.
    pub fn dismiss(&self) -> bool {
        let action = self.shared.dismiss_action.lock().clone();
        match action {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }

    /// Stack depth, modal slots and newest-first history for diagnostics.
    #[must_use]
    pub fn debug_snapshot(&self) -> DebugSnapshot {
        let state = self.state();
        let history = self.shared.history.borrow().reversed();
        DebugSnapshot::capture(&state, history)
    }
}

impl<R: Route> Shared<R> {
    async fn run_gated(
        self: Arc<Self>,
        generation: u64,
        route: R,
        kind: NavigationKind,
    ) -> NavigationOutcome {
        let interceptors = self.interceptors.load_full();
        if !interceptor::should_navigate(&interceptors, &route, kind).await {
            debug!(route = %route.key(), kind = %kind, "Navigation denied by interceptor");
            self.release(generation);
            return NavigationOutcome::Denied;
        }

        if !self.pending.lock().is_current(generation) {
            debug!(route = %route.key(), kind = %kind, "Navigation superseded");
            return NavigationOutcome::Superseded;
        }

        let middleware = self.middleware.load_full();
        for m in middleware.iter() {
            m.before_navigation(&route, kind).await;
        }

        {
            let mut slot = self.pending.lock();
            if !slot.is_current(generation) {
                debug!(route = %route.key(), kind = %kind, "Navigation superseded");
                return NavigationOutcome::Superseded;
            }
            slot.task = None;
            self.apply(&route, kind);
        }

        debug!(route = %route.key(), kind = %kind, "Navigation applied");
        self.notify(&NavigationEvent::Navigated {
            route: route.clone(),
            kind,
        });

        for m in middleware.iter() {
            m.after_navigation(&route, kind).await;
        }
        NavigationOutcome::Completed
    }

    /// Caller must hold the `pending` lock.
    fn apply(&self, route: &R, kind: NavigationKind) {
        self.state.send_modify(|s| match kind {
            NavigationKind::PresentSheet => s.sheet = Some(route.clone()),
            NavigationKind::PresentFullScreen => s.full_screen_cover = Some(route.clone()),
            NavigationKind::PresentPopover => s.popover = Some(route.clone()),
            _ => s.stack.push(route.clone()),
        });
        self.record(Some(route.key()), kind);
    }

    fn release(&self, generation: u64) {
        let mut slot = self.pending.lock();
        if slot.is_current(generation) {
            slot.task = None;
        }
    }

    fn record(&self, route: Option<String>, kind: NavigationKind) {
        self.history
            .send_modify(|h| h.record(NavigationHistoryEntry::new(route, kind)));
    }

    fn notify(&self, event: &NavigationEvent<R>) {
        let observers = self.observers.load();
        for observer in observers.iter() {
            observer.on_event(event);
        }
    }
}

fn append<T: ?Sized>(registry: &ArcSwap<Vec<Arc<T>>>, item: Arc<T>) {
    registry.rcu(|current| {
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend(current.iter().cloned());
        next.push(Arc::clone(&item));
        next
    });
}

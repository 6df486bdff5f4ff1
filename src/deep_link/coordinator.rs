use tokio::runtime::Handle;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, error, info, warn};
use url::Url;

use super::parser::DeepLinkParser;
use crate::error::DeepLinkError;
use crate::route::{PresentationType, Route};
use crate::router::{NavigationOutcome, PendingNavigation, Router};

/// Resolves URLs into routes and replays them onto a [`Router`].
///
/// Parsers are tried in registration order. Replay first dismisses every
/// modal and clears the stack, then issues one gated navigation per route
/// according to its [`PresentationType`]. Each step is awaited before the
/// next one starts so the steps of one replay never supersede each other.
/// Handling a new URL aborts a replay that is still running.
pub struct DeepLinkCoordinator<R: Route> {
    router: Router<R>,
    parsers: Vec<Box<dyn DeepLinkParser<R>>>,
    pending: Option<Url>,
    replay: Option<AbortHandle>,
}

impl<R: Route> DeepLinkCoordinator<R> {
    #[must_use]
    pub fn new(router: Router<R>) -> Self {
        Self {
            router,
            parsers: Vec::new(),
            pending: None,
            replay: None,
        }
    }

    #[must_use]
    pub fn router(&self) -> &Router<R> {
        &self.router
    }

    /// Append a parser. Earlier parsers take precedence.
    pub fn register(&mut self, parser: impl DeepLinkParser<R> + 'static) -> &mut Self {
        self.parsers.push(Box::new(parser));
        self
    }

    #[must_use]
    pub fn parser_count(&self) -> usize {
        self.parsers.len()
    }

    /// Resolve `url` and start replaying its routes.
    ///
    /// Success only means the routes were dispatched: interceptors may still
    /// deny individual steps. The router is untouched when an error is
    /// returned.
    pub fn handle(&mut self, url: &Url) -> Result<DeepLinkReplay, DeepLinkError> {
        let Some(parser) = self.parsers.iter().find(|p| p.can_handle(url)) else {
            warn!(url = %url, "No deep link parser accepts URL");
            return Err(DeepLinkError::NoParserFound(url.clone()));
        };

        let routes = match parser.parse(url) {
            Some(routes) if !routes.is_empty() => routes,
            Some(_) => {
                return Err(DeepLinkError::ParsingFailed {
                    url: url.clone(),
                    reason: Some("parser produced no routes".to_string()),
                })
            }
            None => {
                return Err(DeepLinkError::ParsingFailed {
                    url: url.clone(),
                    reason: None,
                })
            }
        };

        info!(url = %url, routes = routes.len(), "Replaying deep link");
        self.replay(url, routes)
    }

    /// Parse `raw` as a URL and [`handle`](Self::handle) it.
    pub fn handle_str(&mut self, raw: &str) -> Result<DeepLinkReplay, DeepLinkError> {
        let url = Url::parse(raw).map_err(|_| DeepLinkError::InvalidUrl(raw.to_string()))?;
        self.handle(&url)
    }

    /// Park `url` until [`process_pending_deep_link`](Self::process_pending_deep_link)
    /// is called. Only the most recent URL is kept.
    pub fn handle_when_ready(&mut self, url: Url) {
        if let Some(previous) = self.pending.replace(url) {
            debug!(url = %previous, "Pending deep link overwritten");
        }
    }

    #[must_use]
    pub fn pending_deep_link(&self) -> Option<&Url> {
        self.pending.as_ref()
    }

    /// Handle the parked URL, if any. Returns whether handling succeeded; the
    /// slot is cleared either way.
    pub fn process_pending_deep_link(&mut self) -> bool {
        let Some(url) = self.pending.take() else {
            return false;
        };
        match self.handle(&url) {
            Ok(_) => true,
            Err(err) => {
                warn!(url = %url, error = %err, "Pending deep link failed");
                false
            }
        }
    }

    fn replay(&mut self, url: &Url, routes: Vec<R>) -> Result<DeepLinkReplay, DeepLinkError> {
        let Ok(runtime) = Handle::try_current() else {
            error!(url = %url, "Deep link replay requires a Tokio runtime");
            return Err(DeepLinkError::NavigationCancelled(url.clone()));
        };

        if let Some(previous) = self.replay.take() {
            previous.abort();
        }

        self.router.dismiss_all();
        self.router.pop_to_root();

        // The first step is issued synchronously so that it supersedes any
        // navigation still pending from an earlier replay.
        let mut routes = routes.into_iter();
        let first = routes.next().map(|route| dispatch(&self.router, route));
        let router = self.router.clone();
        let handle = runtime.spawn(async move {
            let mut outcomes = Vec::with_capacity(routes.len() + 1);
            if let Some(first) = first {
                outcomes.push(first.finished().await);
            }
            for route in routes {
                outcomes.push(dispatch(&router, route).finished().await);
            }
            outcomes
        });
        self.replay = Some(handle.abort_handle());

        Ok(DeepLinkReplay {
            url: url.clone(),
            handle,
        })
    }
}

fn dispatch<R: Route>(router: &Router<R>, route: R) -> PendingNavigation {
    match route.presentation() {
        PresentationType::Sheet => router.present_sheet(route),
        PresentationType::FullScreenCover => router.present_full_screen(route),
        PresentationType::Popover => router.present_popover(route),
        PresentationType::Push | PresentationType::Replace | PresentationType::Custom(_) => {
            router.push(route)
        }
    }
}

/// Handle to a running deep-link replay.
///
/// Dropping it does not stop the replay.
#[derive(Debug)]
pub struct DeepLinkReplay {
    url: Url,
    handle: JoinHandle<Vec<NavigationOutcome>>,
}

impl DeepLinkReplay {
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Wait for every step to settle and return their outcomes in order.
    ///
    /// Fails with [`DeepLinkError::NavigationCancelled`] when a newer deep
    /// link aborted this replay.
    pub async fn finished(self) -> Result<Vec<NavigationOutcome>, DeepLinkError> {
        self.handle
            .await
            .map_err(|_| DeepLinkError::NavigationCancelled(self.url))
    }
}

impl<R: Route> Router<R> {
    /// Let `coordinator` resolve and replay `url`. Returns whether a parser
    /// accepted and parsed it.
    pub fn handle_deep_link(&self, url: &Url, coordinator: &mut DeepLinkCoordinator<R>) -> bool {
        match coordinator.handle(url) {
            Ok(_) => true,
            Err(err) => {
                warn!(url = %url, error = %err, "Deep link not handled");
                false
            }
        }
    }
}

use std::collections::HashMap;
use url::Url;

use super::parser::{query_parameters, DeepLinkParser};
use super::pattern::PathPattern;
use crate::route::Route;

type RouteBuilder<R> = Box<dyn Fn(&HashMap<String, String>) -> Option<Vec<R>> + Send + Sync>;

/// Parser driven by an ordered table of path patterns.
///
/// The first registered pattern that matches the URL path wins. Its builder
/// receives the captured path parameters merged with the query parameters;
/// a query parameter overrides a path capture of the same name.
///
/// ```rust
/// use navrouter::deep_link::{DeepLinkParser, PathBasedParser};
/// use navrouter::route::Route;
/// use url::Url;
///
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// enum AppRoute { Profile(String) }
///
/// impl Route for AppRoute {
///     fn key(&self) -> String { format!("{self:?}") }
/// }
///
/// let mut parser = PathBasedParser::new().with_scheme("myapp");
/// parser.register("/profile/:id", |params| {
///     Some(vec![AppRoute::Profile(params.get("id")?.clone())])
/// });
///
/// let url = Url::parse("myapp://app/profile/7").unwrap();
/// assert!(parser.can_handle(&url));
/// assert_eq!(parser.parse(&url), Some(vec![AppRoute::Profile("7".into())]));
/// ```
pub struct PathBasedParser<R: Route> {
    scheme: Option<String>,
    host: Option<String>,
    routes: Vec<(PathPattern, RouteBuilder<R>)>,
}

impl<R: Route> PathBasedParser<R> {
    /// A parser accepting any scheme and host.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scheme: None,
            host: None,
            routes: Vec::new(),
        }
    }

    /// Only accept URLs with this scheme.
    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Only accept URLs with this host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Append a pattern and the builder producing its routes.
    pub fn register<F>(&mut self, pattern: &str, builder: F) -> &mut Self
    where
        F: Fn(&HashMap<String, String>) -> Option<Vec<R>> + Send + Sync + 'static,
    {
        self.routes
            .push((PathPattern::compile(pattern), Box::new(builder)));
        self
    }

    /// Registered patterns in match order
    pub fn patterns(&self) -> impl Iterator<Item = &PathPattern> {
        self.routes.iter().map(|(pattern, _)| pattern)
    }
}

impl<R: Route> Default for PathBasedParser<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Route> DeepLinkParser<R> for PathBasedParser<R> {
    fn can_handle(&self, url: &Url) -> bool {
        if let Some(scheme) = &self.scheme {
            if url.scheme() != scheme {
                return false;
            }
        }
        if let Some(host) = &self.host {
            if url.host_str() != Some(host.as_str()) {
                return false;
            }
        }
        true
    }

    fn parse(&self, url: &Url) -> Option<Vec<R>> {
        let path = url.path();
        let (params, builder) = self
            .routes
            .iter()
            .find_map(|(pattern, builder)| pattern.match_path(path).map(|p| (p, builder)))?;

        let mut params = params;
        if let Some(query) = query_parameters(url) {
            params.extend(query);
        }
        builder(&params)
    }
}

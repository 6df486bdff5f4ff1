use std::collections::HashMap;
use url::Url;

use super::parser::{percent_decode, query_parameters, DeepLinkParser};
use crate::route::Route;

type LinkRouteBuilder<R> =
    Box<dyn Fn(&str, Option<&HashMap<String, String>>) -> Option<Vec<R>> + Send + Sync>;

/// Parser for `https` links on one web domain.
///
/// Only URLs whose scheme is `https` and whose host equals the configured host
/// exactly are accepted. The builder receives the percent-decoded path and the
/// query parameters.
pub struct UniversalLinkParser<R: Route> {
    host: String,
    builder: LinkRouteBuilder<R>,
}

impl<R: Route> UniversalLinkParser<R> {
    pub fn new<F>(host: impl Into<String>, builder: F) -> Self
    where
        F: Fn(&str, Option<&HashMap<String, String>>) -> Option<Vec<R>> + Send + Sync + 'static,
    {
        Self {
            host: host.into(),
            builder: Box::new(builder),
        }
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl<R: Route> DeepLinkParser<R> for UniversalLinkParser<R> {
    fn can_handle(&self, url: &Url) -> bool {
        url.scheme() == "https" && url.host_str() == Some(self.host.as_str())
    }

    fn parse(&self, url: &Url) -> Option<Vec<R>> {
        let query = query_parameters(url);
        (self.builder)(&percent_decode(url.path()), query.as_ref())
    }
}

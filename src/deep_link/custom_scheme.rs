use std::collections::HashMap;
use url::Url;

use super::parser::{percent_decode, query_parameters, DeepLinkParser};
use crate::route::Route;

type SchemeRouteBuilder<R> =
    Box<dyn Fn(&str, Option<&str>, Option<&HashMap<String, String>>) -> Option<Vec<R>> + Send + Sync>;

/// Parser for an app-specific scheme such as `myapp://`.
///
/// The builder receives the percent-decoded URL path, its host and its query
/// parameters.
/// For `myapp://profile/42?tab=posts` that is `("/42", Some("profile"),
/// Some({"tab": "posts"}))`.
pub struct CustomSchemeParser<R: Route> {
    scheme: String,
    builder: SchemeRouteBuilder<R>,
}

impl<R: Route> CustomSchemeParser<R> {
    pub fn new<F>(scheme: impl Into<String>, builder: F) -> Self
    where
        F: Fn(&str, Option<&str>, Option<&HashMap<String, String>>) -> Option<Vec<R>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            scheme: scheme.into(),
            builder: Box::new(builder),
        }
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }
}

impl<R: Route> DeepLinkParser<R> for CustomSchemeParser<R> {
    fn can_handle(&self, url: &Url) -> bool {
        url.scheme() == self.scheme
    }

    fn parse(&self, url: &Url) -> Option<Vec<R>> {
        let query = query_parameters(url);
        (self.builder)(&percent_decode(url.path()), url.host_str(), query.as_ref())
    }
}

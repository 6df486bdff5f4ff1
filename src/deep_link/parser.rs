use std::borrow::Cow;
use std::collections::HashMap;
use url::Url;

use crate::route::Route;

/// Turns an external URL into a sequence of routes.
///
/// Parsers are tried in registration order; the first one whose
/// [`can_handle`](DeepLinkParser::can_handle) accepts the URL is the only one
/// asked to [`parse`](DeepLinkParser::parse) it.
pub trait DeepLinkParser<R: Route>: Send + Sync {
    /// Whether this parser is responsible for `url`. Accepts everything by
    /// default.
    fn can_handle(&self, _url: &Url) -> bool {
        true
    }

    /// Routes to replay, root first. `None` means the URL could not be parsed.
    fn parse(&self, url: &Url) -> Option<Vec<R>>;
}

/// Query string of `url` as a map; the last duplicate key wins.
///
/// Returns `None` when the URL has no query component at all.
#[must_use]
pub fn query_parameters(url: &Url) -> Option<HashMap<String, String>> {
    url.query()?;
    Some(url.query_pairs().into_owned().collect())
}

/// Percent-decode one path component. Invalid UTF-8 is replaced with U+FFFD.
pub(crate) fn percent_decode(raw: &str) -> Cow<'_, str> {
    match urlencoding::decode_binary(raw.as_bytes()) {
        Cow::Borrowed(_) => Cow::Borrowed(raw),
        Cow::Owned(bytes) => Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_decode() {
        assert!(matches!(percent_decode("plain"), Cow::Borrowed("plain")));
        assert_eq!(percent_decode("Jane%20Doe"), "Jane Doe");
        assert_eq!(percent_decode("caf%C3%A9"), "café");
        assert_eq!(percent_decode("a+b"), "a+b");
        assert_eq!(percent_decode("bad%FF"), "bad\u{FFFD}");
    }

    #[test]
    fn test_query_parameters() {
        let url = Url::parse("myapp://search?q=rust&page=2&q=tokio").unwrap();
        let params = query_parameters(&url).unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params["q"], "tokio");
        assert_eq!(params["page"], "2");
    }

    #[test]
    fn test_query_parameters_absent() {
        let url = Url::parse("myapp://search").unwrap();
        assert!(query_parameters(&url).is_none());
    }

    #[test]
    fn test_query_parameters_decoded() {
        let url = Url::parse("https://example.com/?name=Jane%20Doe").unwrap();
        assert_eq!(query_parameters(&url).unwrap()["name"], "Jane Doe");
    }
}

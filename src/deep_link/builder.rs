use url::Url;

use crate::error::DeepLinkError;

/// Builds deep-link URLs for a scheme and optional host.
///
/// ```rust
/// use navrouter::deep_link::DeepLinkBuilder;
///
/// let builder = DeepLinkBuilder::new("myapp").with_host("profile");
/// let url = builder.build_with_query("/42", [("tab", "posts")]).unwrap();
/// assert_eq!(url.as_str(), "myapp://profile/42?tab=posts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLinkBuilder {
    scheme: String,
    host: Option<String>,
}

impl DeepLinkBuilder {
    #[must_use]
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: None,
        }
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// URL for `path` without a query.
    pub fn build(&self, path: &str) -> Result<Url, DeepLinkError> {
        self.build_with_query(path, std::iter::empty::<(&str, &str)>())
    }

    /// URL for `path` with the given query pairs, in iteration order.
    pub fn build_with_query<I, K, V>(&self, path: &str, query: I) -> Result<Url, DeepLinkError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut url = match &self.host {
            Some(host) => {
                let raw = format!("{}://{}", self.scheme, host);
                let mut url = Url::parse(&raw).map_err(|_| DeepLinkError::InvalidUrl(raw))?;
                url.set_path(path);
                url
            }
            None => {
                let raw = format!("{}:{}", self.scheme, path);
                Url::parse(&raw).map_err(|_| DeepLinkError::InvalidUrl(raw))?
            }
        };

        let mut pairs = query.into_iter().peekable();
        if pairs.peek().is_some() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_host() {
        let url = DeepLinkBuilder::new("myapp")
            .with_host("settings")
            .build("/privacy")
            .unwrap();
        assert_eq!(url.scheme(), "myapp");
        assert_eq!(url.host_str(), Some("settings"));
        assert_eq!(url.path(), "/privacy");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_build_without_host() {
        let url = DeepLinkBuilder::new("myapp").build("/home").unwrap();
        assert_eq!(url.as_str(), "myapp:/home");
    }

    #[test]
    fn test_query_is_encoded() {
        let url = DeepLinkBuilder::new("https")
            .with_host("example.com")
            .build_with_query("/search", [("q", "rust lang"), ("page", "2")])
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/search?q=rust+lang&page=2");
    }

    #[test]
    fn test_invalid_scheme() {
        let err = DeepLinkBuilder::new("1nvalid")
            .with_host("x")
            .build("/")
            .unwrap_err();
        assert!(matches!(err, DeepLinkError::InvalidUrl(_)));
    }
}

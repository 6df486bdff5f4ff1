//! Slash-delimited path patterns with `:name` parameters.

use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;

use super::parser::percent_decode;

/// One segment of a compiled [`PathPattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment byte-for-byte
    Literal(String),
    /// Binds the path segment under this name
    Param(String),
}

/// A path pattern such as `/user/:id/posts/:post`, compiled once and matched
/// many times.
///
/// Empty segments are ignored on both sides, so `/user/:id`, `user/:id/` and
/// `//user//:id` are the same pattern, and `/user/42/` matches it.
///
/// ```rust
/// use navrouter::deep_link::PathPattern;
///
/// let pattern = PathPattern::compile("/user/:id");
/// let params = pattern.match_path("/user/42").unwrap();
/// assert_eq!(params["id"], "42");
/// assert!(pattern.match_path("/user/42/edit").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: SmallVec<[Segment; 4]>,
}

impl PathPattern {
    #[must_use]
    pub fn compile(pattern: &str) -> Self {
        let segments = split(pattern)
            .map(|part| match part.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(part.to_string()),
            })
            .collect();
        Self {
            raw: pattern.to_string(),
            segments,
        }
    }

    /// The pattern as it was written
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Match `path`, as it appears in a URL, against the pattern.
    ///
    /// Each path segment is percent-decoded before it is compared or
    /// captured. Returns the captured parameters on success. When a
    /// parameter name repeats, the later capture wins.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<HashMap<String, String>> {
        let parts: SmallVec<[&str; 8]> = split(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            let part = percent_decode(part);
            match segment {
                Segment::Param(name) => {
                    params.insert(name.clone(), part.into_owned());
                }
                Segment::Literal(literal) if *literal == part => {}
                Segment::Literal(_) => return None,
            }
        }
        Some(params)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_segments() {
        let pattern = PathPattern::compile("/user/:id/posts");
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Literal("user".into()),
                Segment::Param("id".into()),
                Segment::Literal("posts".into()),
            ]
        );
        assert_eq!(pattern.to_string(), "/user/:id/posts");
    }

    #[test]
    fn test_param_capture() {
        let pattern = PathPattern::compile("/user/:id");
        let params = pattern.match_path("/user/42").unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params["id"], "42");
    }

    #[test]
    fn test_segment_count_must_match() {
        let pattern = PathPattern::compile("/user/:id");
        assert!(pattern.match_path("/user/42/edit").is_none());
        assert!(pattern.match_path("/user").is_none());
    }

    #[test]
    fn test_literal_mismatch() {
        let pattern = PathPattern::compile("/user/:id");
        assert!(pattern.match_path("/users/42").is_none());
        assert!(pattern.match_path("/User/42").is_none());
    }

    #[test]
    fn test_empty_segments_ignored() {
        let pattern = PathPattern::compile("user/:id/");
        assert_eq!(pattern.match_path("//user//7/").unwrap()["id"], "7");
    }

    #[test]
    fn test_repeated_param_last_wins() {
        let pattern = PathPattern::compile("/:x/:x");
        assert_eq!(pattern.match_path("/a/b").unwrap()["x"], "b");
    }

    #[test]
    fn test_root_pattern() {
        let pattern = PathPattern::compile("/");
        assert!(pattern.match_path("").unwrap().is_empty());
        assert!(pattern.match_path("/").unwrap().is_empty());
        assert!(pattern.match_path("/home").is_none());
    }

    #[test]
    fn test_segments_are_decoded() {
        let pattern = PathPattern::compile("/tag/café/:name");
        let params = pattern.match_path("/tag/caf%C3%A9/Jane%20Doe").unwrap();
        assert_eq!(params["name"], "Jane Doe");
        // An encoded slash stays inside its segment
        let params = pattern.match_path("/tag/café/a%2Fb").unwrap();
        assert_eq!(params["name"], "a/b");
    }

    #[test]
    fn test_multiple_params() {
        let pattern = PathPattern::compile("/org/:org/repo/:repo");
        let params = pattern.match_path("/org/rust-lang/repo/cargo").unwrap();
        assert_eq!(params["org"], "rust-lang");
        assert_eq!(params["repo"], "cargo");
    }
}

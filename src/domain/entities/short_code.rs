//! Code and tag extracted from a request path.

/// The `{code}[/{tag}]` part of a short-link path.
///
/// `tag` records which referring context produced a click, as in
/// `/abc123/campaign-x`. Segments past the tag are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortCodeData {
    pub code: String,
    pub tag: Option<String>,
}

impl ShortCodeData {
    /// Parses a path relative to the route prefix, e.g. `abc123/campaign-x`.
    ///
    /// Leading and trailing slashes are ignored. An empty path yields an empty
    /// code.
    pub fn from_path(path: &str) -> Self {
        let mut segments = path.trim_matches('/').split('/');

        let code = segments.next().unwrap_or_default().to_string();
        let tag = segments
            .next()
            .filter(|tag| !tag.is_empty())
            .map(str::to_string);

        Self { code, tag }
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

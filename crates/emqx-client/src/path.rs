//! Endpoint paths relative to the client base URL.

use std::fmt;

use url::Url;

use crate::error::{Error, Result};

/// Path of an API endpoint, relative to the client base URL.
///
/// Kept as segments rather than a string so that an interpolated identifier
/// (node, client ID, topic, plugin) always lands in exactly one URL segment.
/// Characters that are legal inside a segment (`@`, `:`, `+`, `=`) are sent
/// verbatim; `/`, `?`, `#`, `%` and the like are percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    segments: Vec<String>,
}

impl ApiPath {
    /// Root of the v3 management API, `api/v3`.
    pub fn v3() -> Self {
        Self {
            segments: vec!["api".to_string(), "v3".to_string()],
        }
    }

    /// Append one segment.
    pub fn push(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Terminate the path with a trailing slash.
    pub fn dir(self) -> Self {
        self.push("")
    }

    /// Segments in order, unencoded.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Append this path to `base`.
    ///
    /// A trailing slash on the base is absorbed, so `http://host:8080` and
    /// `http://host:8080/` resolve identically.
    pub(crate) fn resolve(&self, base: &str) -> Result<Url> {
        let mut url = Url::parse(base)?;
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(&self.segments);
        Ok(url)
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

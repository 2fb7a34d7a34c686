//! Path composition for tree-shaped resource addressing.
//!
//! A [`ResourcePath`] is an ordered sequence of path segments, immutable
//! once constructed. Descending into a sub-resource derives a *new* path by
//! concatenation; the parent path is never mutated, so a long-lived
//! collection handle can hand out child paths freely.
//!
//! # Example
//!
//! ```rust
//! use canopy_rest::rest::ResourcePath;
//!
//! let base = ResourcePath::parse("/2010-04-01/Accounts/AC1");
//! let child = base.join("SIP", None).join("Domains", Some("DM1"));
//!
//! assert_eq!(child.to_string(), "/2010-04-01/Accounts/AC1/SIP/Domains/DM1");
//! // the parent is untouched
//! assert_eq!(base.to_string(), "/2010-04-01/Accounts/AC1");
//! ```

use std::fmt;

/// An ordered sequence of path segments addressing one node of the
/// resource tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// Parses a server-absolute path into segments.
    ///
    /// Empty segments (doubled or trailing separators) are dropped.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Parses a server-supplied page URI into the path its items live under.
    ///
    /// The query string and any format suffix on the final segment are
    /// stripped: `"/2010-04-01/Accounts.json?Page=1"` addresses items under
    /// `/2010-04-01/Accounts`.
    #[must_use]
    pub fn from_page_uri(uri: &str) -> Self {
        let without_query = uri.split(['?', '#']).next().unwrap_or(uri);
        let mut path = Self::parse(without_query);

        if let Some(last) = path.segments.last_mut() {
            if let Some(dot) = last.find('.') {
                last.truncate(dot);
            }
        }
        path.segments.retain(|segment| !segment.is_empty());

        path
    }

    /// Returns a new path with one segment appended.
    ///
    /// The segment is trimmed of separators so composition can never double
    /// them. The receiver is unchanged.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        let trimmed = segment.trim_matches('/');
        if !trimmed.is_empty() {
            segments.push(trimmed.to_string());
        }
        Self { segments }
    }

    /// Returns a new path with a segment and optional identifier appended.
    ///
    /// `base.join(seg, Some(id))` equals `base.child(seg).child(id)`.
    #[must_use]
    pub fn join(&self, segment: &str, identifier: Option<&str>) -> Self {
        let path = self.child(segment);
        match identifier {
            Some(id) => path.child(id),
            None => path,
        }
    }

    /// Returns the path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the final segment, if any.
    ///
    /// For an instance path this is the instance identifier.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}

// Verify ResourcePath is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourcePath>();
};

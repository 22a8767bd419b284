//! # Remote URL Model
//!
//! [`RemoteUrlSet`] is the one piece of data that moves between the config
//! file and the repository. Both readers build one, and both the config
//! writer and the repository applier consume one.
//!
//! The set is an ordered list of URLs with no duplicates. Construction goes
//! through [`crate::dedup::dedup`], so a set can never hold the same URL
//! twice, and the first URL stays first.

use std::fmt;

use crate::dedup::dedup;

/// The conventional name of the default remote.
pub const ORIGIN: &str = "origin";

/// Ordered, duplicate-free list of URLs for a single remote.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RemoteUrlSet {
    urls: Vec<String>,
}

impl RemoteUrlSet {
    /// Builds a set from any sequence of URLs, dropping later duplicates.
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: dedup(urls.into_iter().map(Into::into)),
        }
    }

    /// The URLs in priority order.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Consumes the set and returns the underlying URLs.
    pub fn into_urls(self) -> Vec<String> {
        self.urls
    }
}

impl fmt::Display for RemoteUrlSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.urls.join(", "))
    }
}

/// A remote as reported by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    pub name: String,
    pub urls: Vec<String>,
}

impl Remote {
    pub fn new(name: impl Into<String>, urls: Vec<String>) -> Self {
        Self {
            name: name.into(),
            urls,
        }
    }
}

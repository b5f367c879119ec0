//! Core types for subscriptions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Path prefix for subreddit pages and combined feeds.
pub const SUBREDDIT_PREFIX: &str = "/r/";

/// Separator joining subreddit names in a combined feed path.
pub const FEED_SEPARATOR: char = '+';

/// A subreddit name in canonical (lower-case) form.
///
/// Construction always canonicalizes, so two names that differ only in
/// casing compare equal.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Subreddit(String);

impl Subreddit {
    /// Canonicalize a name of any casing.
    pub fn new(name: &str) -> Self {
        Subreddit(name.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of this subreddit's own page (`/r/<name>`).
    pub fn page_path(&self) -> String {
        format!("{}{}", SUBREDDIT_PREFIX, self.0)
    }

    /// Sidebar label (`r/<name>`).
    pub fn label(&self) -> String {
        format!("r/{}", self.0)
    }
}

impl From<String> for Subreddit {
    fn from(name: String) -> Self {
        Subreddit(name.to_lowercase())
    }
}

impl From<&str> for Subreddit {
    fn from(name: &str) -> Self {
        Subreddit::new(name)
    }
}

impl From<Subreddit> for String {
    fn from(sub: Subreddit) -> Self {
        sub.0
    }
}

impl fmt::Debug for Subreddit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subreddit({})", self.0)
    }
}

impl fmt::Display for Subreddit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Address of a combined multi-subreddit feed, `/r/<a>+<b>+...`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FeedPath(String);

impl FeedPath {
    /// Join names in the given order. Returns `None` for an empty slice.
    pub fn combined(names: &[Subreddit]) -> Option<Self> {
        let (first, rest) = names.split_first()?;

        let mut path = first.page_path();
        for name in rest {
            path.push(FEED_SEPARATOR);
            path.push_str(name.as_str());
        }

        Some(FeedPath(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for FeedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeedPath({})", self.0)
    }
}

impl fmt::Display for FeedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Subscribed,
    Unsubscribed,
}

/// What the home link should do when clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeClick {
    /// Suppress the default navigation and go to the combined feed.
    Intercept,
    /// Let the link follow its own destination.
    PassThrough,
}

//! The ordered, unique list of subscribed subreddits.

use crate::error::Result;
use crate::types::{FeedPath, Subreddit, Toggle};
use std::collections::HashSet;

/// Subscribed subreddit names.
///
/// Names are canonical and unique. Inserting re-sorts the whole list
/// ascending; removing leaves the remaining order untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubscriptionList {
    names: Vec<Subreddit>,
}

impl SubscriptionList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from names in the given order.
    ///
    /// Later duplicates (after canonicalization) are dropped. The order is
    /// not re-sorted, so a persisted list reloads exactly as it was written.
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = Subreddit>,
    {
        let mut seen = HashSet::new();
        let names = names
            .into_iter()
            .filter(|name| seen.insert(name.clone()))
            .collect();

        Self { names }
    }

    /// Parse the persisted form, a JSON array of strings.
    pub fn decode(raw: &str) -> Result<Self> {
        let names: Vec<Subreddit> = serde_json::from_str(raw)?;
        Ok(Self::from_names(names))
    }

    /// Encode to the persisted form.
    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.names)?)
    }

    pub fn contains(&self, name: &Subreddit) -> bool {
        self.names.contains(name)
    }

    /// Add a name and re-sort. Returns false if it was already present.
    pub fn insert(&mut self, name: Subreddit) -> bool {
        if self.contains(&name) {
            return false;
        }

        self.names.push(name);
        self.names.sort();
        true
    }

    /// Remove a name. Returns false if it was not present.
    pub fn remove(&mut self, name: &Subreddit) -> bool {
        let before = self.names.len();
        self.names.retain(|n| n != name);
        self.names.len() != before
    }

    /// Remove the name if present, insert it otherwise.
    pub fn toggle(&mut self, name: Subreddit) -> Toggle {
        if self.remove(&name) {
            Toggle::Unsubscribed
        } else {
            self.insert(name);
            Toggle::Subscribed
        }
    }

    pub fn names(&self) -> &[Subreddit] {
        &self.names
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Subreddit> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Combined feed path in current list order, `None` when empty.
    pub fn feed_path(&self) -> Option<FeedPath> {
        FeedPath::combined(&self.names)
    }
}

impl<'a> IntoIterator for &'a SubscriptionList {
    type Item = &'a Subreddit;
    type IntoIter = std::slice::Iter<'a, Subreddit>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

//! IRCv3 message tag block.
//!
//! A tag block is the `key=value;key2;key3=value3` text that follows the `@`
//! sentinel. [`Tags`] holds the parsed pairs with values in decoded form.
//! Iteration order is not part of the contract; only the set of pairs is.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use tracing::trace;

use super::escape::{escape_tag_value, unescape_tag_value};

/// Parsed message tags, keyed by tag name.
///
/// An empty value marks a flag tag, which serializes without `=`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tags(BTreeMap<String, String>);

impl Tags {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a tag block without its leading `@`.
    ///
    /// Never fails. Entries without `=` become flag tags, entries with an
    /// empty key are skipped, and a repeated key keeps its last value.
    pub fn parse(block: &str) -> Self {
        let mut tags = Tags::new();

        for entry in block.split(';') {
            let (key, raw) = entry.split_once('=').unwrap_or((entry, ""));
            if key.is_empty() {
                trace!(entry, "skipping tag entry with empty key");
                continue;
            }
            tags.0.insert(key.to_owned(), unescape_tag_value(raw));
        }

        tags
    }

    /// Look up a tag value. `None` means the tag is absent; a flag tag
    /// yields `Some("")`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert or replace a tag, returning the previous value. The value is
    /// given in decoded form.
    ///
    /// Tag keys are never empty: an empty key is ignored and `None` is
    /// returned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        if key.is_empty() {
            trace!("ignoring tag with empty key");
            return None;
        }
        self.0.insert(key, value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, decoded value)` pairs.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }
}

/// Iterator over the pairs of a [`Tags`] set.
#[derive(Debug, Clone)]
pub struct Iter<'a>(btree_map::Iter<'a, String, String>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Tags {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Tags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tags = Tags::new();
        tags.extend(iter);
        tags
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Tags {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

/// Writes the bare `key=value;flag` form, without the `@` sentinel.
impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            f.write_str(key)?;
            if !value.is_empty() {
                f.write_str("=")?;
                escape_tag_value(f, value)?;
            }
        }
        Ok(())
    }
}

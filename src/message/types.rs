use crate::prefix::Prefix;

use super::tags::Tags;

/// A single protocol message.
///
/// `command` is upper-cased when parsed. `params` holds the middle
/// parameters followed by the trailing parameter, in wire order; an empty
/// vector means the message has no parameters. Cloning yields a fully
/// independent copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub tags: Tags,
    pub prefix: Option<Prefix>,
    pub command: String,
    pub params: Vec<String>,
}

impl Message {
    /// The last parameter, or `""` when there are none.
    pub fn trailing(&self) -> &str {
        self.params.last().map_or("", String::as_str)
    }

    /// Look up a tag value. See [`Tags::get`].
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key)
    }

    /// The sender name, if the message carries a prefix.
    pub fn source_name(&self) -> Option<&str> {
        self.prefix
            .as_ref()
            .map(|p| p.name.as_str())
            .filter(|name| !name.is_empty())
    }
}

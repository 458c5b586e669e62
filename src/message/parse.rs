use std::str::FromStr;

use tracing::debug;

use crate::error::MessageParseError;
use crate::prefix::Prefix;

use super::nom_parser::ParsedMessage;
use super::tags::Tags;
use super::types::Message;

impl Message {
    /// Parse a single protocol line.
    ///
    /// Trailing CR/LF are ignored. Malformed tag blocks and prefixes degrade
    /// to a best-effort parse; only the four [`MessageParseError`] cases are
    /// reported.
    ///
    /// ```
    /// use tightbeam::Message;
    ///
    /// let msg = Message::parse("@id=123 :nick!user@host privmsg #chan :hello world").unwrap();
    /// assert_eq!(msg.command, "PRIVMSG");
    /// assert_eq!(msg.params, ["#chan", "hello world"]);
    /// assert_eq!(msg.tag("id"), Some("123"));
    /// ```
    pub fn parse(line: &str) -> Result<Message, MessageParseError> {
        let parsed = ParsedMessage::parse(line).map_err(|err| {
            debug!(%err, line, "rejected protocol line");
            err
        })?;

        Ok(Message {
            tags: parsed.tags.map(Tags::parse).unwrap_or_default(),
            prefix: parsed.prefix.map(Prefix::parse),
            command: parsed.command.to_uppercase(),
            params: parsed.params.into_iter().map(str::to_owned).collect(),
        })
    }
}

impl FromStr for Message {
    type Err = MessageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Message::parse(s)
    }
}

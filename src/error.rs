//! Error types for the message codec.
//!
//! Only message parsing can fail. Tag blocks and prefixes are parsed
//! leniently and never produce an error.

use thiserror::Error;

/// Convenience type alias for Results using [`MessageParseError`].
pub type Result<T, E = MessageParseError> = std::result::Result<T, E>;

/// Errors encountered when parsing a protocol line into a [`Message`](crate::Message).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// The line was empty once line terminators were stripped.
    #[error("empty message")]
    EmptyMessage,

    /// A tag block was present but nothing followed it.
    #[error("no data after tags")]
    NoDataAfterTags,

    /// A prefix was present but nothing followed it.
    #[error("no data after prefix")]
    NothingAfterPrefix,

    /// No command token could be found.
    #[error("no command")]
    NoCommand,
}

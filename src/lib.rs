//! # tightbeam
//!
//! A Rust library for parsing and serializing single IRC protocol lines,
//! with IRCv3 message tags.
//!
//! ## Features
//!
//! - Message parsing with tags, prefixes, commands, and parameters
//! - IRCv3 tag value escaping and unescaping
//! - Lenient parsing: malformed tag blocks and prefixes degrade to a
//!   best-effort result instead of failing
//! - Serialization through `Display` or directly into byte sinks with
//!   [`IrcEncode`]
//! - Optional `serde` support
//!
//! The crate deals with one line at a time. Reading lines from a socket,
//! framing them, and interpreting commands are left to the caller.

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ```rust
//! use tightbeam::{Message, Prefix};
//!
//! let raw = "@time=2023-01-01T12:00:00Z;flag :nick!user@host PRIVMSG #channel :Hello there!";
//! let message: Message = raw.parse().expect("valid protocol line");
//!
//! assert_eq!(message.command, "PRIVMSG");
//! assert_eq!(message.trailing(), "Hello there!");
//! assert_eq!(message.tag("flag"), Some(""));
//! assert_eq!(message.prefix, Some(Prefix::new("nick", "user", "host")));
//!
//! let reparsed: Message = message.to_string().parse().unwrap();
//! assert_eq!(reparsed, message);
//! ```

pub mod encode;
pub mod error;
pub mod message;
pub mod prefix;

pub use self::encode::IrcEncode;
pub use self::error::MessageParseError;
pub use self::message::{Message, Tags};
pub use self::prefix::Prefix;

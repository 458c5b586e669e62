//! Encoding messages directly into byte sinks.
//!
//! This module provides the [`IrcEncode`] trait for writing messages straight
//! to any [`Write`] implementor (sockets, buffers, files) without building an
//! intermediate `String` the way `Display` does.
//!
//! The output is byte-identical to the `Display` form. No line terminator is
//! appended; framing belongs to the transport.
//!
//! # Example
//!
//! ```
//! use tightbeam::encode::IrcEncode;
//! use tightbeam::Message;
//!
//! let msg: Message = "PRIVMSG #channel :Hello there!".parse().unwrap();
//! let mut buf = Vec::new();
//! msg.encode(&mut buf).unwrap();
//!
//! assert_eq!(&buf, b"PRIVMSG #channel :Hello there!");
//! ```

use std::io::{self, Write};

use crate::message::escape::escape_tag_value_to_writer;
use crate::message::serialize::needs_colon_prefix;
use crate::message::{Message, Tags};
use crate::prefix::Prefix;

/// A trait for encoding protocol elements directly to a byte stream.
///
/// # Implementors
///
/// - [`Message`] - a complete protocol line
/// - [`Prefix`] - message source, without the `:` sentinel
/// - [`Tags`] - tag block, without the `@` sentinel
pub trait IrcEncode {
    /// Encode this value to the given writer.
    ///
    /// Returns the number of bytes written on success.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the write fails.
    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<usize>;

    /// Encode this value to a new `Vec<u8>`.
    #[must_use]
    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(512);
        // Writing into a Vec cannot fail.
        let _ = self.encode(&mut buf);
        buf
    }
}

#[inline]
fn put<W: Write>(w: &mut W, bytes: &[u8]) -> io::Result<usize> {
    w.write_all(bytes)?;
    Ok(bytes.len())
}

impl IrcEncode for Message {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let mut written = 0;

        if !self.tags.is_empty() {
            written += put(w, b"@")?;
            written += self.tags.encode(w)?;
            written += put(w, b" ")?;
        }

        if let Some(prefix) = self.prefix.as_ref().filter(|p| !p.name.is_empty()) {
            written += put(w, b":")?;
            written += prefix.encode(w)?;
            written += put(w, b" ")?;
        }

        written += put(w, self.command.as_bytes())?;

        if let Some((trailing, middle)) = self.params.split_last() {
            for param in middle {
                written += put(w, b" ")?;
                written += put(w, param.as_bytes())?;
            }
            if needs_colon_prefix(trailing) {
                written += put(w, b" :")?;
            } else {
                written += put(w, b" ")?;
            }
            written += put(w, trailing.as_bytes())?;
        }

        Ok(written)
    }
}

impl IrcEncode for Prefix {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let mut written = put(w, self.name.as_bytes())?;
        if !self.user.is_empty() {
            written += put(w, b"!")?;
            written += put(w, self.user.as_bytes())?;
        }
        if !self.host.is_empty() {
            written += put(w, b"@")?;
            written += put(w, self.host.as_bytes())?;
        }
        Ok(written)
    }
}

impl IrcEncode for Tags {
    fn encode<W: Write>(&self, w: &mut W) -> io::Result<usize> {
        let mut written = 0;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                written += put(w, b";")?;
            }
            written += put(w, key.as_bytes())?;
            if !value.is_empty() {
                written += put(w, b"=")?;
                written += escape_tag_value_to_writer(w, value)?;
            }
        }
        Ok(written)
    }
}

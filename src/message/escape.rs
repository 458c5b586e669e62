//! IRCv3 message tag value escaping.
//!
//! Tag values reserve `;`, space, `\`, CR and LF. On the wire each of them is
//! carried as a two-character escape sequence; in memory values are always
//! kept in decoded form.

use std::fmt::{Result as FmtResult, Write};
use std::io;

use tracing::trace;

/// Wire escape sequence for a reserved character, if `c` is reserved.
#[inline]
fn escape_sequence(c: char) -> Option<&'static str> {
    match c {
        ';' => Some("\\:"),
        ' ' => Some("\\s"),
        '\\' => Some("\\\\"),
        '\r' => Some("\\r"),
        '\n' => Some("\\n"),
        _ => None,
    }
}

/// Escape a tag value for serialization.
///
/// Escapes special characters according to the IRCv3 message-tags spec.
pub fn escape_tag_value(f: &mut dyn Write, value: &str) -> FmtResult {
    for c in value.chars() {
        match escape_sequence(c) {
            Some(seq) => f.write_str(seq)?,
            None => f.write_char(c)?,
        }
    }
    Ok(())
}

/// Escape a tag value straight into a byte sink.
///
/// Returns the number of bytes written.
pub fn escape_tag_value_to_writer<W: io::Write + ?Sized>(
    w: &mut W,
    value: &str,
) -> io::Result<usize> {
    let mut written = 0;
    let mut start = 0;

    // Copy unreserved runs in one write.
    for (i, c) in value.char_indices() {
        if let Some(seq) = escape_sequence(c) {
            w.write_all(value[start..i].as_bytes())?;
            w.write_all(seq.as_bytes())?;
            written += i - start + seq.len();
            start = i + c.len_utf8();
        }
    }
    w.write_all(value[start..].as_bytes())?;
    written += value.len() - start;

    Ok(written)
}

/// Escape a tag value into a new `String`.
pub fn escaped_tag_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    // Writing into a String cannot fail.
    let _ = escape_tag_value(&mut escaped, value);
    escaped
}

/// Reserved character for a wire escape code (the character after `\`).
#[inline]
fn unescaped_char(code: char) -> Option<char> {
    match code {
        ':' => Some(';'),
        's' => Some(' '),
        '\\' => Some('\\'),
        'r' => Some('\r'),
        'n' => Some('\n'),
        _ => None,
    }
}

/// Unescape a tag value from wire format.
///
/// Reverses the escaping applied by [`escape_tag_value`]. Decoding is
/// lenient: an unknown escape `\x` yields `x`, and a dangling backslash at
/// the end of the value is dropped.
pub fn unescape_tag_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(code) = chars.next() else {
            trace!("dropping dangling backslash in tag value");
            break;
        };
        out.push(unescaped_char(code).unwrap_or_else(|| {
            trace!(escape = %code, "unknown tag value escape, passing through");
            code
        }));
    }

    out
}

use std::fmt;

use super::types::Message;

/// Whether the last parameter must be sent in the `" :"` trailing form.
#[inline]
pub(crate) fn needs_colon_prefix(s: &str) -> bool {
    s.is_empty() || s.contains(' ') || s.starts_with(':')
}

/// Writes the wire form of the message, without a line terminator.
impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.tags.is_empty() {
            write!(f, "@{} ", self.tags)?;
        }

        if let Some(prefix) = self.prefix.as_ref().filter(|p| !p.name.is_empty()) {
            write!(f, ":{} ", prefix)?;
        }

        f.write_str(&self.command)?;

        if let Some((trailing, middle)) = self.params.split_last() {
            for param in middle {
                write!(f, " {}", param)?;
            }
            if needs_colon_prefix(trailing) {
                f.write_str(" :")?;
            } else {
                f.write_str(" ")?;
            }
            f.write_str(trailing)?;
        }

        Ok(())
    }
}

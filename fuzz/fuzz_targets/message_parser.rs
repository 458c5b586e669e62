//! Fuzz target for message parsing
//!
//! Feeds arbitrary lines to the parser and checks that it never panics and
//! that anything it accepts serializes to a line it accepts again.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;
use tightbeam::{IrcEncode, Message};

/// IRCv3 tag section budget (8191 bytes) plus a 512 byte message body.
const MAX_LINE_LEN: usize = 8191 + 512;

fuzz_target!(|data: &[u8]| {
    // Only fuzz valid UTF-8 strings to focus on protocol-level issues
    if let Ok(input) = str::from_utf8(data) {
        if input.len() > MAX_LINE_LEN {
            return;
        }

        if let Ok(msg) = input.parse::<Message>() {
            let serialized = msg.to_string();
            assert_eq!(msg.to_bytes(), serialized.as_bytes());
            let _ = serialized.parse::<Message>();
        }
    }
});

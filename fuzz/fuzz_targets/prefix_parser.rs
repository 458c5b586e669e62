//! Fuzz target for prefix parsing

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::str;
use tightbeam::Prefix;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = str::from_utf8(data) {
        let prefix = Prefix::parse(input);
        if !prefix.name.is_empty() {
            assert_eq!(Prefix::parse(&prefix.to_string()), prefix);
        }
    }
});

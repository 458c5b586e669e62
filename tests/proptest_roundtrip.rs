//! Property-based tests for the message codec.
//!
//! Uses proptest to generate random protocol components and verify that:
//! 1. Tag value escaping is lossless
//! 2. Parsing never panics, whatever the input
//! 3. serialize → parse is lossless for well-formed messages
//! 4. parse → serialize → parse is idempotent

use proptest::prelude::*;
use tightbeam::message::escape::{escaped_tag_value, unescape_tag_value};
use tightbeam::{IrcEncode, Message, Prefix, Tags};

// =============================================================================
// STRATEGIES - Generators for valid protocol components
// =============================================================================

/// Nickname: starts with a letter or special char, no `!`, `@` or space.
fn nickname_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z\\[\\]\\\\^_`{|}][a-zA-Z0-9\\-\\[\\]\\\\^_`{|}]{0,8}")
        .expect("valid regex")
}

fn username_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z~][a-zA-Z0-9]{0,9}").expect("valid regex")
}

fn hostname_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]+(\\.[a-z0-9]+)*").expect("valid regex")
}

/// Prefix with any combination of optional user and host.
fn prefix_strategy() -> impl Strategy<Value = Prefix> {
    (
        nickname_strategy(),
        prop::option::of(username_strategy()),
        prop::option::of(hostname_strategy()),
    )
        .prop_map(|(nick, user, host)| {
            Prefix::new(nick, user.unwrap_or_default(), host.unwrap_or_default())
        })
}

/// Command: a word or a three digit numeric, already upper-case.
fn command_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z]{1,12}|[0-9]{3}").expect("valid regex")
}

/// Middle parameter: non-empty, no spaces, not starting with `:`.
fn middle_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^ :\r\n\0][^ \r\n\0]{0,20}").expect("valid regex")
}

/// Free text that may be sent as the trailing parameter.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^\r\n\0]{0,200}").expect("valid regex")
}

fn tag_key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("\\+?([a-z0-9.]+/)?[a-zA-Z0-9\\-]{1,20}").expect("valid regex")
}

/// Tag value in decoded form; any character is allowed, reserved ones
/// included.
fn tag_value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::string::string_regex("[a-zA-Z0-9 ;\\\\\r\n=:.\\-_é👋]{1,40}").expect("valid regex"),
    ]
}

fn tags_strategy() -> impl Strategy<Value = Tags> {
    prop::collection::vec((tag_key_strategy(), tag_value_strategy()), 0..5)
        .prop_map(|pairs| pairs.into_iter().collect())
}

fn params_strategy() -> impl Strategy<Value = Vec<String>> {
    (
        prop::collection::vec(middle_strategy(), 0..6),
        prop::option::of(text_strategy()),
    )
        .prop_map(|(mut params, trailing)| {
            params.extend(trailing);
            params
        })
}

/// Generate a complete valid Message
fn message_strategy() -> impl Strategy<Value = Message> {
    (
        tags_strategy(),
        prop::option::of(prefix_strategy()),
        command_strategy(),
        params_strategy(),
    )
        .prop_map(|(tags, prefix, command, params)| Message {
            tags,
            prefix,
            command,
            params,
        })
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Escaping any value and decoding it again yields the original.
    #[test]
    fn escape_roundtrip(value in any::<String>()) {
        let escaped = escaped_tag_value(&value);
        prop_assert!(!escaped.contains([';', ' ', '\r', '\n']));
        prop_assert_eq!(unescape_tag_value(&escaped), value);
    }

    /// The fundamental roundtrip property: serialize → parse = identity for
    /// well-formed messages.
    #[test]
    fn message_roundtrip(msg in message_strategy()) {
        let serialized = msg.to_string();

        let parsed: Message = serialized.parse()
            .expect("Serialized message should be parseable");

        prop_assert_eq!(&msg, &parsed,
            "Roundtrip failed for serialized: {}", serialized);
    }

    /// Byte encoding and `Display` agree.
    #[test]
    fn encode_matches_display(msg in message_strategy()) {
        prop_assert_eq!(msg.to_bytes(), msg.to_string().into_bytes());
    }

    /// Prefix roundtrip: any valid prefix can be parsed and re-serialized
    #[test]
    fn prefix_roundtrip(prefix in prefix_strategy()) {
        let serialized = prefix.to_string();
        let parsed = Prefix::parse(&serialized);
        prop_assert_eq!(&prefix, &parsed,
            "Prefix roundtrip failed for: {}", serialized);
    }

    /// Tag sets survive a trip through the wire, whatever the order.
    #[test]
    fn tags_roundtrip(tags in tags_strategy()) {
        let parsed = Tags::parse(&tags.to_string());
        prop_assert_eq!(tags.len(), parsed.len());
        for (key, value) in &tags {
            prop_assert_eq!(parsed.get(key), Some(value));
        }
    }

    /// Parsing never panics, whatever the input.
    #[test]
    fn parse_never_panics(line in any::<String>()) {
        let _ = line.parse::<Message>();
    }

    /// Whatever parses is stable under parse → serialize → parse.
    ///
    /// Two degenerate shapes are excluded: a prefix with an empty name (it
    /// is dropped on serialization, which can expose a sentinel-led
    /// command) and a command that itself starts with a sentinel.
    #[test]
    fn parse_is_idempotent(line in "[a-zA-Z0-9 :@!;=#\\\\]{0,120}") {
        if let Ok(first) = line.parse::<Message>() {
            prop_assume!(first.prefix.is_none() || first.source_name().is_some());
            prop_assume!(!first.command.starts_with(['@', ':']));

            let serialized = first.to_string();
            let second: Message = serialized.parse()
                .expect("Serialized message should be parseable");
            prop_assert_eq!(&first, &second,
                "Reparse differs for serialized: {}", serialized);
            prop_assert_eq!(&serialized, &second.to_string());
        }
    }
}

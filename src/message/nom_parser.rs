//! Nom-based line splitter.
//!
//! Splits a protocol line into borrowed sections: the raw tag block, the raw
//! prefix, the command and the parameters. Interpreting the tag block and
//! prefix is left to [`Tags`](super::Tags) and [`Prefix`](crate::Prefix).

use nom::{
    bytes::complete::{tag, take_till, take_until, take_while, take_while1},
    character::complete::char,
    combinator::rest,
    error::{context, VerboseError},
    multi::many0,
    sequence::{preceded, separated_pair},
    IResult,
};

use crate::error::MessageParseError;

type ParseResult<I, O> = IResult<I, O, VerboseError<I>>;

const TAGS_SENTINEL: char = '@';
const PREFIX_SENTINEL: char = ':';

/// Parse a sentinel-led block up to (not including) the first space.
fn sentinel_block(input: &str, sentinel: char) -> ParseResult<&str, &str> {
    context(
        "parsing sentinel block",
        preceded(char(sentinel), take_till(|c: char| c == ' ')),
    )(input)
}

fn separator(input: &str) -> ParseResult<&str, char> {
    char(' ')(input)
}

/// Split `head :trailing` at the first `" :"`.
fn trailing_split(input: &str) -> ParseResult<&str, (&str, &str)> {
    context(
        "splitting trailing parameter",
        separated_pair(take_until(" :"), tag(" :"), rest),
    )(input)
}

/// Tokenize on runs of spaces. Leading, trailing and repeated spaces yield
/// no empty tokens.
fn space_tokens(input: &str) -> ParseResult<&str, Vec<&str>> {
    context(
        "tokenizing command and middle parameters",
        many0(preceded(
            take_while(|c: char| c == ' '),
            take_while1(|c: char| c != ' '),
        )),
    )(input)
}

/// Outcome of looking for an optional sentinel-led segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    /// The line does not start with the sentinel.
    Absent,
    /// The sentinel is present but no space follows the block.
    Unterminated,
    Present { block: &'a str, rest: &'a str },
}

fn segment(input: &str, sentinel: char) -> Segment<'_> {
    let Ok((after, block)) = sentinel_block(input, sentinel) else {
        return Segment::Absent;
    };
    match separator(after) {
        Ok((rest, _)) => Segment::Present { block, rest },
        Err(_) => Segment::Unterminated,
    }
}

/// A split protocol line with borrowed string slices.
///
/// The command is returned as it appears on the wire; case folding happens
/// when building the owned [`Message`](super::Message).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ParsedMessage<'a> {
    /// Raw tag block (without the leading `@`), if present.
    pub tags: Option<&'a str>,
    /// Raw prefix (without the leading `:`), if present.
    pub prefix: Option<&'a str>,
    pub command: &'a str,
    /// Middle parameters followed by the trailing parameter, if any.
    pub params: Vec<&'a str>,
}

impl<'a> ParsedMessage<'a> {
    /// Split a protocol line.
    ///
    /// Trailing CR/LF are ignored. The stages run in wire order with no
    /// backtracking: tags, prefix, then command and parameters.
    pub fn parse(input: &'a str) -> Result<Self, MessageParseError> {
        let mut line = input.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            return Err(MessageParseError::EmptyMessage);
        }

        let tags = match segment(line, TAGS_SENTINEL) {
            Segment::Absent => None,
            Segment::Unterminated => return Err(MessageParseError::NoDataAfterTags),
            Segment::Present { block, rest } => {
                line = rest;
                Some(block)
            }
        };

        let prefix = match segment(line, PREFIX_SENTINEL) {
            Segment::Absent => None,
            // After a tag block the line has run out before any command.
            Segment::Unterminated if tags.is_some() => return Err(MessageParseError::NoCommand),
            Segment::Unterminated => return Err(MessageParseError::NothingAfterPrefix),
            Segment::Present { block, rest } => {
                line = rest;
                Some(block)
            }
        };

        let (head, trailing) = match trailing_split(line) {
            Ok((_, (head, trailing))) => (head, Some(trailing)),
            Err(_) => (line, None),
        };

        let mut tokens = space_tokens(head)
            .map(|(_, tokens)| tokens)
            .unwrap_or_default()
            .into_iter();
        let command = tokens.next().ok_or(MessageParseError::NoCommand)?;

        let mut params: Vec<&str> = tokens.collect();
        params.extend(trailing);

        Ok(ParsedMessage {
            tags,
            prefix,
            command,
            params,
        })
    }
}

//! A `nom`-based parser for dotted paths.
//!
//! Parsing is permissive: a component whose brackets do not form a single
//! `[<digits>]` index or a trailing `[*]` is kept as a plain key, so malformed
//! syntax like `a[x]` or `a[0][1]` resolves to absence instead of failing.
use super::ast::{Path, Segment};
use crate::config::Limits;
use crate::error::PathError;
use log::debug;
use nom::{
    IResult, Parser,
    bytes::complete::take_while,
    character::complete::{char, digit1},
    combinator::{all_consuming, map, map_res},
    sequence::delimited,
};

// --- Main Public Parsers ---

/// Parses a full dotted path with the default [`Limits`].
pub fn parse_path(input: &str) -> Result<Path, PathError> {
    parse_path_with(input, &Limits::default())
}

/// Parses a full dotted path, rejecting paths longer than `limits.max_segments`.
pub fn parse_path_with(input: &str, limits: &Limits) -> Result<Path, PathError> {
    if input.is_empty() {
        return Err(PathError::EmptyPath);
    }
    let segments: Vec<Segment> = input.split('.').map(parse_segment).collect();
    if segments.len() > limits.max_segments {
        return Err(PathError::TooManySegments {
            path: input.to_string(),
            count: segments.len(),
            limit: limits.max_segments,
        });
    }
    debug!("Parsed path '{}' into {} segments", input, segments.len());
    Ok(Path {
        raw: input.to_string(),
        segments,
    })
}

/// Classifies one path component. Never fails; see the module docs.
pub fn parse_segment(token: &str) -> Segment {
    if let Ok((_, segment)) = indexed_key(token) {
        return segment;
    }
    if let Some(name) = token.strip_suffix("[*]") {
        return Segment::Wildcard(name.to_string());
    }
    Segment::Key(token.to_string())
}

// --- Combinators ---

fn unbracketed(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c != '[' && c != ']').parse(input)
}

fn index(input: &str) -> IResult<&str, usize> {
    map_res(delimited(char('['), digit1, char(']')), |digits: &str| {
        digits.parse::<usize>()
    })
    .parse(input)
}

/// `<head>[<digits>]<tail>` with no other brackets; the name is `head + tail`.
fn indexed_key(input: &str) -> IResult<&str, Segment> {
    map(
        all_consuming((unbracketed, index, unbracketed)),
        |(head, index, tail)| Segment::Indexed {
            name: format!("{}{}", head, tail),
            index,
        },
    )
    .parse(input)
}

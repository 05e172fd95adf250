//! Path template lexer.
//!
//! Turns one `/`-delimited chunk of a template into a [`PathSegment`].
//!
//! # Design Decisions
//! - Plain literals, a lone `*` and fully enclosed parameters skip the
//!   state machine entirely
//! - Mixed chunks run a three-state machine, then adjacent pieces are folded
//! - All failures are registration-time errors

use crate::routing::error::RoutingError;
use crate::routing::segment::{PathSegment, SlashPolicy};

const DELIMITERS: [char; 4] = ['{', '}', '<', '>'];
const ADJACENT_VIOLATIONS: [&str; 4] = ["*{", "*<", "}*", ">*"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Normal,
    InsideIgnore,
    InsideAccept,
}

/// Parse a single path segment. `path` is the full template, for errors.
pub fn parse_segment(
    segment: &str,
    path: &str,
    raw_regex_literals: bool,
) -> Result<PathSegment, RoutingError> {
    let delimiters = segment.chars().filter(|c| DELIMITERS.contains(c)).count();
    let wildcards = segment.chars().filter(|&c| c == '*').count();

    if delimiters % 2 != 0 {
        return Err(missing_brackets(segment, path));
    }
    if ADJACENT_VIOLATIONS.iter().any(|v| segment.contains(v)) {
        return Err(RoutingError::WildcardBracketAdjacent {
            segment: segment.to_string(),
            path: path.to_string(),
        });
    }

    if segment == "*" {
        return Ok(PathSegment::Wildcard);
    }
    if delimiters == 0 && wildcards == 0 {
        return Ok(literal(segment, raw_regex_literals));
    }
    if delimiters == 2 {
        if let Some(name) = enclosed(segment, '{', '}') {
            return Ok(PathSegment::parameter(name, SlashPolicy::IgnoreSlash));
        }
        if let Some(name) = enclosed(segment, '<', '>') {
            return Ok(PathSegment::parameter(name, SlashPolicy::AcceptSlash));
        }
    }

    let pieces = lex(segment, path, raw_regex_literals)?;
    let mut folded = fold(pieces);
    if folded.len() == 1 {
        if let Some(single) = folded.pop() {
            return Ok(single);
        }
    }
    Ok(PathSegment::Composite(folded))
}

fn enclosed(segment: &str, open: char, close: char) -> Option<&str> {
    segment.strip_prefix(open)?.strip_suffix(close)
}

fn literal(text: &str, raw_regex: bool) -> PathSegment {
    if raw_regex {
        PathSegment::raw_regex(text)
    } else {
        PathSegment::literal(text)
    }
}

fn missing_brackets(segment: &str, path: &str) -> RoutingError {
    RoutingError::MissingBrackets {
        segment: segment.to_string(),
        path: path.to_string(),
    }
}

fn lex(segment: &str, path: &str, raw_regex: bool) -> Result<Vec<PathSegment>, RoutingError> {
    let mut state = LexState::Normal;
    let mut pieces = Vec::new();
    let mut buffer = String::new();

    for c in segment.chars() {
        match state {
            LexState::Normal => match c {
                '*' => {
                    flush_literal(&mut buffer, &mut pieces, raw_regex);
                    pieces.push(PathSegment::Wildcard);
                }
                '{' => {
                    flush_literal(&mut buffer, &mut pieces, raw_regex);
                    state = LexState::InsideIgnore;
                }
                '<' => {
                    flush_literal(&mut buffer, &mut pieces, raw_regex);
                    state = LexState::InsideAccept;
                }
                '}' | '>' => return Err(missing_brackets(segment, path)),
                _ => buffer.push(c),
            },
            LexState::InsideIgnore | LexState::InsideAccept => {
                let (close, slash) = if state == LexState::InsideIgnore {
                    ('}', SlashPolicy::IgnoreSlash)
                } else {
                    ('>', SlashPolicy::AcceptSlash)
                };
                if c == close {
                    pieces.push(PathSegment::parameter(std::mem::take(&mut buffer), slash));
                    state = LexState::Normal;
                } else if DELIMITERS.contains(&c) {
                    return Err(missing_brackets(segment, path));
                } else {
                    buffer.push(c);
                }
            }
        }
    }

    if state != LexState::Normal {
        return Err(missing_brackets(segment, path));
    }
    flush_literal(&mut buffer, &mut pieces, raw_regex);
    Ok(pieces)
}

fn flush_literal(buffer: &mut String, pieces: &mut Vec<PathSegment>, raw_regex: bool) {
    if !buffer.is_empty() {
        pieces.push(literal(buffer, raw_regex));
        buffer.clear();
    }
}

/// Merge adjacent literals and collapse runs of wildcards.
fn fold(pieces: Vec<PathSegment>) -> Vec<PathSegment> {
    let mut folded: Vec<PathSegment> = Vec::with_capacity(pieces.len());
    for piece in pieces {
        let merged = match (folded.last_mut(), &piece) {
            (Some(PathSegment::Wildcard), PathSegment::Wildcard) => true,
            (
                Some(PathSegment::Literal { text, raw_regex }),
                PathSegment::Literal {
                    text: next,
                    raw_regex: next_raw,
                },
            ) if *raw_regex == *next_raw => {
                text.push_str(next);
                true
            }
            _ => false,
        };
        if !merged {
            folded.push(piece);
        }
    }
    folded
}

//! Grammar rules for single input lines.
//!
//! A block line reads `label(width,height)`. Whitespace may precede each
//! integer and trail the line; anything else after the closing bracket makes
//! the line malformed.

use nom::{
    character::complete::{char, digit1, one_of, space0},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{delimited, pair, preceded, separated_pair},
    IResult,
};

use floorplan_core::{Label, Orientation, ParseError, Size};

use crate::token::TokenKind;

/// Parse a signed block label.
fn label(input: &str) -> IResult<&str, i64> {
    map_res(
        preceded(space0, recognize(pair(opt(one_of("+-")), digit1))),
        |s: &str| s.parse::<i64>(),
    )(input)
}

/// Parse an unsigned extent.
fn extent(input: &str) -> IResult<&str, u64> {
    map_res(preceded(space0, digit1), |s: &str| s.parse::<u64>())(input)
}

/// Parse `label(width,height)`.
fn block(input: &str) -> IResult<&str, (i64, (u64, u64))> {
    pair(
        label,
        delimited(char('('), separated_pair(extent, char(','), extent), char(')')),
    )(input)
}

/// Classify one non-empty input line (without its terminator).
///
/// A line whose first character is `H` or `V` is a cut; the rest of it is
/// ignored. Every other line must be a well-formed block.
pub fn parse_line(content: &str, line: usize) -> Result<TokenKind, ParseError> {
    if let Some(orientation) = content.chars().next().and_then(Orientation::from_marker) {
        return Ok(TokenKind::Cut(orientation));
    }

    let (_, (label, (width, height))) = all_consuming(block)(content.trim_end()).map_err(|_| {
        ParseError::MalformedLeaf {
            line,
            found: content.to_string(),
        }
    })?;

    let label = Label(label);
    if width == 0 || height == 0 {
        return Err(ParseError::InvalidDimension { line, label });
    }

    Ok(TokenKind::Leaf {
        label,
        size: Size::new(width, height),
    })
}

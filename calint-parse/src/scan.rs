//! Byte-level scanning primitives shared by the literal grammars.
//!
//! Every scanner takes the remaining input and hands back what it recognized together with
//! the input that follows it. Scanners for optional pieces return `None` without consuming
//! anything when the piece is absent.

use std::num::IntErrorKind;

use calint_result::{Error, Result};

/// A value recognized at the front of `input`, plus whatever input follows it.
#[derive(Debug)]
pub(crate) struct Parsed<'i, V> {
    pub(crate) value: V,
    pub(crate) input: &'i [u8],
}

/// Remove one optional leading and one optional trailing quote (`'` or `"`).
///
/// The two quotes are independent of each other; an unbalanced quote is tolerated.
pub(crate) fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix(['\'', '"']).unwrap_or(text);
    text.strip_suffix(['\'', '"']).unwrap_or(text)
}

/// Parse an optional `+`/`-` prefix, yielding `-1` or `1`.
pub(crate) fn parse_sign(input: &[u8]) -> Parsed<'_, i64> {
    match input.first() {
        Some(b'-') => Parsed {
            value: -1,
            input: &input[1..],
        },
        Some(b'+') => Parsed {
            value: 1,
            input: &input[1..],
        },
        _ => Parsed { value: 1, input },
    }
}

/// Parse a run of one or more ASCII digits.
pub(crate) fn parse_digits(input: &[u8]) -> Option<Parsed<'_, &str>> {
    let len = input.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return None;
    }
    // ASCII digits are always valid UTF-8.
    let digits = std::str::from_utf8(&input[..len]).ok()?;
    Some(Parsed {
        value: digits,
        input: &input[len..],
    })
}

/// Consume `byte` if it is the next byte of `input`.
pub(crate) fn parse_byte(input: &[u8], byte: u8) -> Option<&[u8]> {
    match input.split_first() {
        Some((&first, rest)) if first == byte => Some(rest),
        _ => None,
    }
}

/// Consume one or more ASCII whitespace bytes.
pub(crate) fn parse_required_whitespace(input: &[u8]) -> Option<&[u8]> {
    let len = input.iter().take_while(|b| b.is_ascii_whitespace()).count();
    (len > 0).then(|| &input[len..])
}

/// Consume `word` if `input` starts with it, ignoring ASCII case.
pub(crate) fn parse_keyword<'i>(input: &'i [u8], word: &str) -> Option<&'i [u8]> {
    let word = word.as_bytes();
    let head = input.get(..word.len())?;
    head.eq_ignore_ascii_case(word).then(|| &input[word.len()..])
}

/// Convert `text` to an `i64` and check it against `[min, max]`.
///
/// `text` may carry a leading `+` or `-`. A digit string too long for 64 bits is reported as
/// [`Error::OutOfRange`] for `field`; any other malformed text is a pattern mismatch against
/// the original literal `input`.
pub(crate) fn long_with_range(
    field: &'static str,
    text: &str,
    min: i64,
    max: i64,
    input: &str,
) -> Result<i64> {
    let value = text.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            Error::out_of_range(field, text, min, max)
        }
        _ => Error::pattern_mismatch(field, input),
    })?;
    if value < min || value > max {
        return Err(Error::out_of_range(field, value, min, max));
    }
    Ok(value)
}

//! Full-form literals: `interval [<n> year[s]] [<n> month[s]] ... [<n> microsecond[s]]`.
//!
//! Every unit clause is optional, but the clauses that are present must follow the canonical
//! unit order and each unit may appear at most once. Keyword and unit names match without
//! regard to ASCII case, and the `interval` keyword itself may be left out.

use std::borrow::Cow;

use calint_result::{Error, Result};
use calint_types::{CalendarInterval, IntervalUnit};

use crate::scan::{
    Parsed, parse_byte, parse_digits, parse_keyword, parse_required_whitespace, parse_sign,
};

const KEYWORD: &str = "interval";
const FORM: &str = "interval";

/// Parse a full-form interval literal, failing with a descriptive error.
///
/// Clause values are accumulated with two's-complement wraparound and the month total is
/// truncated to 32 bits, so well-formed but enormous literals still produce a value.
pub fn parse_interval(input: &str) -> Result<CalendarInterval> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::BlankInput);
    }

    let text = match parse_keyword(trimmed.as_bytes(), KEYWORD) {
        Some(rest) if rest.is_empty() => return Err(Error::MissingUnits),
        Some(_) => Cow::Borrowed(trimmed),
        None => Cow::Owned(format!("{KEYWORD} {trimmed}")),
    };

    let mismatch = || Error::pattern_mismatch(FORM, input);
    let mut rest = parse_keyword(text.as_bytes(), KEYWORD).ok_or_else(mismatch)?;

    let mut months: i64 = 0;
    let mut micros: i64 = 0;
    for unit in IntervalUnit::ALL {
        let Some(Parsed { value, input }) = parse_clause(rest, unit) else {
            continue;
        };
        rest = input;
        let amount = value
            .parse::<i64>()
            .map_err(|_| Error::out_of_range(unit.name(), value, i64::MIN, i64::MAX))?;
        match (unit.months_scale(), unit.micros_scale()) {
            (Some(scale), _) => months = months.wrapping_add(amount.wrapping_mul(scale)),
            (None, Some(scale)) => micros = micros.wrapping_add(amount.wrapping_mul(scale)),
            (None, None) => {}
        }
    }
    if !rest.is_empty() {
        return Err(mismatch());
    }

    let value = CalendarInterval::new(months as i32, micros);
    tracing::trace!(
        input,
        months = value.months,
        micros = value.microseconds,
        "parsed full-form interval literal"
    );
    Ok(value)
}

/// Like [`parse_interval`], but for a value that may be absent.
pub fn parse_interval_opt(input: Option<&str>) -> Result<CalendarInterval> {
    match input {
        Some(input) => parse_interval(input),
        None => Err(Error::NullInput(FORM)),
    }
}

/// Parse a full-form interval literal, returning `None` for anything that is not one.
///
/// This is the best-effort entry point: absent, blank, malformed and overflowing input all
/// produce `None`.
pub fn try_parse_interval(input: Option<&str>) -> Option<CalendarInterval> {
    match parse_interval_opt(input) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(?input, error = %err, "rejected interval literal");
            None
        }
    }
}

/// Parse one `<ws><sign?><digits><ws><unit>[s]` clause for `unit`.
///
/// Returns the signed number text, or `None` without consuming input when the clause at the
/// front of `input` is not for `unit`.
fn parse_clause(input: &[u8], unit: IntervalUnit) -> Option<Parsed<'_, &str>> {
    let start = parse_required_whitespace(input)?;
    let Parsed {
        input: after_sign, ..
    } = parse_sign(start);
    let Parsed {
        input: after_digits,
        ..
    } = parse_digits(after_sign)?;
    let number = std::str::from_utf8(&start[..start.len() - after_digits.len()]).ok()?;

    let rest = parse_required_whitespace(after_digits)?;
    let rest = parse_keyword(rest, unit.name())?;
    let rest = parse_byte(rest, b's')
        .or_else(|| parse_byte(rest, b'S'))
        .unwrap_or(rest);
    Some(Parsed {
        value: number,
        input: rest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use calint_types::{MICROS_PER_DAY, MICROS_PER_HOUR, MICROS_PER_MINUTE, MICROS_PER_WEEK};

    #[test]
    fn years_and_days() {
        assert_eq!(
            parse_interval("interval 1 year 2 days"),
            Ok(CalendarInterval::new(12, 2 * 86_400_000_000))
        );
    }

    #[test]
    fn keyword_is_optional() {
        assert_eq!(
            parse_interval("3 months"),
            parse_interval("interval 3 months")
        );
        assert_eq!(parse_interval("  -1 week "), Ok(CalendarInterval::new(0, -MICROS_PER_WEEK)));
    }

    #[test]
    fn every_unit_in_order() {
        let text = "interval 1 year 2 months 3 weeks 4 days 5 hours 6 minutes \
                    7 seconds 8 milliseconds 9 microseconds";
        let expected_micros = 3 * MICROS_PER_WEEK
            + 4 * MICROS_PER_DAY
            + 5 * MICROS_PER_HOUR
            + 6 * MICROS_PER_MINUTE
            + 7_008_009;
        assert_eq!(
            parse_interval(text),
            Ok(CalendarInterval::new(14, expected_micros))
        );
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(parse_interval("INTERVAL 1 YEAR"), parse_interval("interval 1 year"));
        assert_eq!(
            parse_interval("Interval 2 Hours 3 MINUTES"),
            Ok(CalendarInterval::new(0, 2 * MICROS_PER_HOUR + 3 * MICROS_PER_MINUTE))
        );
    }

    #[test]
    fn whitespace_between_tokens_may_repeat() {
        assert_eq!(
            parse_interval("interval\t1   day\n2 hours"),
            Ok(CalendarInterval::new(0, MICROS_PER_DAY + 2 * MICROS_PER_HOUR))
        );
    }

    #[test]
    fn signs_are_per_clause() {
        assert_eq!(
            parse_interval("interval -1 month +3 days"),
            Ok(CalendarInterval::new(-1, 3 * MICROS_PER_DAY))
        );
    }

    #[test]
    fn out_of_order_or_repeated_clauses_mismatch() {
        for text in [
            "interval 1 day 1 year",
            "interval 1 day 2 days",
            "interval 1 fortnight",
            "interval 1day",
            "interval1 day",
            "interval 1.5 days",
            "interval - 1 day",
            "interval 1 dayss",
            "intervalx",
        ] {
            assert_eq!(
                parse_interval(text),
                Err(Error::pattern_mismatch(FORM, text)),
                "input {text:?}"
            );
        }
    }

    #[test]
    fn blank_and_bare_keyword() {
        assert_eq!(parse_interval(""), Err(Error::BlankInput));
        assert_eq!(parse_interval(" \t "), Err(Error::BlankInput));
        assert_eq!(parse_interval("interval"), Err(Error::MissingUnits));
        assert_eq!(parse_interval(" INTERVAL "), Err(Error::MissingUnits));
        assert_eq!(parse_interval_opt(None), Err(Error::NullInput(FORM)));
    }

    #[test]
    fn oversized_numbers_are_out_of_range() {
        assert_eq!(
            parse_interval("interval 99999999999999999999 days"),
            Err(Error::out_of_range(
                "day",
                "99999999999999999999",
                i64::MIN,
                i64::MAX
            ))
        );
    }

    #[test]
    fn accumulation_wraps_instead_of_failing() {
        let value = parse_interval("interval 9223372036854775807 weeks").expect("well formed");
        assert_eq!(value.microseconds, i64::MAX.wrapping_mul(MICROS_PER_WEEK));
        let value = parse_interval("interval 3000000000 months").expect("well formed");
        assert_eq!(value.months, 3_000_000_000i64 as i32);
    }

    #[test]
    fn permissive_entry_point_never_fails() {
        for text in [
            None,
            Some(""),
            Some("   "),
            Some("interval"),
            Some("garbage"),
            Some("interval 1 day 1 year"),
            Some("interval 99999999999999999999 days"),
        ] {
            assert_eq!(try_parse_interval(text), None, "input {text:?}");
        }
        assert_eq!(
            try_parse_interval(Some("1 hour")),
            Some(CalendarInterval::new(0, MICROS_PER_HOUR))
        );
    }
}

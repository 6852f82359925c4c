//! Compact day-time literals: `[+|-][DAYS ][HH:]MM:SS[.fraction]`.
//!
//! The caller states which fields the literal spans (`DAY TO SECOND`, `HOUR TO MINUTE`, and so
//! on) through a pair of [`DayTimeField`] directives. The directives pick how an ambiguous
//! two-number body is read and which trailing fields are dropped; they are never inferred
//! from the text itself.

use std::fmt;
use std::str::FromStr;

use calint_result::{Error, Result};
use calint_types::{
    CalendarInterval, MICROS_PER_DAY, MICROS_PER_HOUR, MICROS_PER_MINUTE, MICROS_PER_SECOND,
};

use crate::scan::{Parsed, long_with_range, parse_byte, parse_digits, parse_sign, strip_quotes};

const FORM: &str = "day-time format of 'd h:m:s.n'";
const NANOS_DIGITS: usize = 9;

/// One end of a day-time field range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayTimeField {
    Day,
    Hour,
    Minute,
    Second,
}

impl DayTimeField {
    pub const fn name(self) -> &'static str {
        match self {
            DayTimeField::Day => "day",
            DayTimeField::Hour => "hour",
            DayTimeField::Minute => "minute",
            DayTimeField::Second => "second",
        }
    }
}

impl fmt::Display for DayTimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DayTimeField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "day" => Ok(DayTimeField::Day),
            "hour" => Ok(DayTimeField::Hour),
            "minute" => Ok(DayTimeField::Minute),
            "second" => Ok(DayTimeField::Second),
            other => Err(Error::UnknownUnit(other.to_string())),
        }
    }
}

/// Field range directives for [`parse_day_time_with_options`].
///
/// Defaults to `DAY TO SECOND`, which keeps every field of the literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTimeOptions {
    /// Leading field. `Minute` makes a two-number body read as `MM:SS`.
    pub from: DayTimeField,
    /// Trailing field. Everything finer than it is zeroed; `Day` is not a valid trailing field.
    pub to: DayTimeField,
}

impl Default for DayTimeOptions {
    fn default() -> Self {
        Self {
            from: DayTimeField::Day,
            to: DayTimeField::Second,
        }
    }
}

/// Parse a day-time literal covering `DAY TO SECOND`.
pub fn parse_day_time(input: &str) -> Result<CalendarInterval> {
    parse_day_time_with_options(input, DayTimeOptions::default())
}

/// Parse a day-time literal with explicit `from`/`to` directives.
pub fn parse_day_time_with_fields(
    input: &str,
    from: DayTimeField,
    to: DayTimeField,
) -> Result<CalendarInterval> {
    parse_day_time_with_options(input, DayTimeOptions { from, to })
}

pub fn parse_day_time_with_options(
    input: &str,
    options: DayTimeOptions,
) -> Result<CalendarInterval> {
    let trimmed = input.trim();
    let body = scan_body(strip_quotes(trimmed).as_bytes())
        .ok_or_else(|| Error::pattern_mismatch(FORM, input))?;

    let days = match body.days {
        Some(days) => long_with_range("day", days, 0, i64::from(i32::MAX), input)?,
        None => 0,
    };

    let (hours, mut minutes, mut seconds) = match body.time {
        TimeBody::Three {
            hour,
            minute,
            second,
        } => (
            long_with_range("hour", hour, 0, 23, input)?,
            long_with_range("minute", minute, 0, 59, input)?,
            long_with_range("second", second, 0, 59, input)?,
        ),
        TimeBody::Two { first, second } if options.from == DayTimeField::Minute => (
            0,
            long_with_range("minute", first, 0, 59, input)?,
            long_with_range("second", second, 0, 59, input)?,
        ),
        TimeBody::Two { first, second } if body.fraction.is_some() => (
            0,
            long_with_range("minute", first, 0, 59, input)?,
            long_with_range("second", second, 0, 59, input)?,
        ),
        // The trailing number is the minute here but keeps the `second` label in errors.
        TimeBody::Two { first, second } => (
            long_with_range("hour", first, 0, 23, input)?,
            long_with_range("second", second, 0, 59, input)?,
            0,
        ),
    };

    let mut nanos = match body.fraction {
        Some(fraction) => {
            let padded: String = fraction
                .chars()
                .chain(std::iter::repeat('0'))
                .take(NANOS_DIGITS)
                .collect();
            long_with_range("nanosecond", &padded, 0, 999_999_999, input)?
        }
        None => 0,
    };

    match options.to {
        DayTimeField::Hour => {
            minutes = 0;
            seconds = 0;
            nanos = 0;
        }
        DayTimeField::Minute => {
            seconds = 0;
            nanos = 0;
        }
        DayTimeField::Second => {}
        DayTimeField::Day => {
            return Err(Error::unsupported_truncation(
                trimmed,
                options.from,
                options.to,
            ));
        }
    }

    let micros = days
        .wrapping_mul(MICROS_PER_DAY)
        .wrapping_add(hours * MICROS_PER_HOUR)
        .wrapping_add(minutes * MICROS_PER_MINUTE)
        .wrapping_add(seconds * MICROS_PER_SECOND)
        .wrapping_add(nanos / 1000);
    let value = CalendarInterval::new(0, body.sign.wrapping_mul(micros));
    tracing::trace!(
        input,
        from = %options.from,
        to = %options.to,
        micros = value.microseconds,
        "parsed day-time interval literal"
    );
    Ok(value)
}

/// The digit groups of a day-time literal, before any range checks.
struct DayTimeBody<'i> {
    sign: i64,
    days: Option<&'i str>,
    time: TimeBody<'i>,
    fraction: Option<&'i str>,
}

enum TimeBody<'i> {
    /// `HH:MM:SS`
    Three {
        hour: &'i str,
        minute: &'i str,
        second: &'i str,
    },
    /// `A:B`, read as `HH:MM` or `MM:SS` depending on context.
    Two { first: &'i str, second: &'i str },
}

fn scan_body(input: &[u8]) -> Option<DayTimeBody<'_>> {
    let Parsed { value: sign, input } = parse_sign(input);
    let Parsed {
        value: leading,
        input,
    } = parse_digits(input)?;

    // A single space after the first number marks it as the day count.
    let (days, first, input) = match parse_byte(input, b' ') {
        Some(input) => {
            let Parsed { value, input } = parse_digits(input)?;
            (Some(leading), value, input)
        }
        None => (None, leading, input),
    };

    let input = parse_byte(input, b':')?;
    let Parsed {
        value: second_group,
        input,
    } = parse_digits(input)?;

    let (time, input) = match parse_byte(input, b':') {
        Some(input) => {
            let Parsed { value, input } = parse_digits(input)?;
            let time = TimeBody::Three {
                hour: first,
                minute: second_group,
                second: value,
            };
            (time, input)
        }
        None => {
            let time = TimeBody::Two {
                first,
                second: second_group,
            };
            (time, input)
        }
    };

    let (fraction, input) = match parse_byte(input, b'.') {
        Some(input) => {
            let Parsed { value, input } = parse_digits(input)?;
            (Some(value), input)
        }
        None => (None, input),
    };

    input.is_empty().then_some(DayTimeBody {
        sign,
        days,
        time,
        fraction,
    })
}

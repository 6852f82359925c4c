//! Bare numbers tagged with one unit, as in `INTERVAL '5' DAY`.

use calint_result::{Error, Result};
use calint_types::{CalendarInterval, IntervalUnit, MICROS_PER_SECOND};

use crate::scan::{long_with_range, strip_quotes};

/// Parse `input` as a signed count of `unit`.
///
/// The number may be wrapped in quotes. Each unit is bounded so that scaling the count into
/// its field cannot overflow: year and month counts must fit the 32-bit `months` field, all
/// other units must fit 64-bit microseconds once multiplied by their scale.
///
/// `second` additionally accepts `ss.nnnnnnnnn`. The digits after the point are read as a
/// nanosecond count and added to the whole seconds, so `-1.5` is exactly minus one second
/// (five nanoseconds truncate to zero microseconds) and `-1.500000000` is `-0.5` seconds.
pub fn parse_single_unit(unit: IntervalUnit, input: &str) -> Result<CalendarInterval> {
    let text = strip_quotes(input.trim());
    let field = unit.name();

    let value = match unit {
        IntervalUnit::Year => {
            let years = long_with_range(
                field,
                text,
                i64::from(i32::MIN / 12),
                i64::from(i32::MAX / 12),
                input,
            )?;
            CalendarInterval::new(years as i32 * 12, 0)
        }
        IntervalUnit::Month => {
            let months = long_with_range(
                field,
                text,
                i64::from(i32::MIN),
                i64::from(i32::MAX),
                input,
            )?;
            CalendarInterval::new(months as i32, 0)
        }
        IntervalUnit::Second => CalendarInterval::new(0, parse_second_nano(text, input)?),
        IntervalUnit::Microsecond => {
            CalendarInterval::new(0, long_with_range(field, text, i64::MIN, i64::MAX, input)?)
        }
        IntervalUnit::Week
        | IntervalUnit::Day
        | IntervalUnit::Hour
        | IntervalUnit::Minute
        | IntervalUnit::Millisecond => {
            let scale = unit.micros_scale().unwrap_or(1);
            let count = long_with_range(field, text, i64::MIN / scale, i64::MAX / scale, input)?;
            CalendarInterval::new(0, count * scale)
        }
    };
    tracing::trace!(
        input,
        unit = field,
        months = value.months,
        micros = value.microseconds,
        "parsed single-unit interval literal"
    );
    Ok(value)
}

/// Parse a single-unit literal whose unit is given by name (`"day"`, `"millisecond"`, ...).
pub fn parse_single_unit_named(unit: &str, input: &str) -> Result<CalendarInterval> {
    parse_single_unit(unit.parse()?, input)
}

/// Convert `ss` or `ss.nnnnnnnnn` into microseconds.
fn parse_second_nano(text: &str, input: &str) -> Result<i64> {
    const MIN: i64 = i64::MIN / MICROS_PER_SECOND;
    const MAX: i64 = i64::MAX / MICROS_PER_SECOND;

    // Trailing empty segments do not count, so `5.` reads as whole seconds.
    let text = text.trim_end_matches('.');
    match text.split_once('.') {
        None => Ok(long_with_range("second", text, MIN, MAX, input)? * MICROS_PER_SECOND),
        Some((_, fraction)) if fraction.contains('.') => Err(Error::pattern_mismatch(
            "second-nano format of ss.nnnnnnnnn",
            input,
        )),
        Some((whole, fraction)) => {
            let seconds = if whole.is_empty() {
                0
            } else {
                long_with_range("second", whole, MIN, MAX, input)?
            };
            let nanos = long_with_range("nanosecond", fraction, 0, 999_999_999, input)?;
            Ok((seconds * MICROS_PER_SECOND).wrapping_add(nanos / 1000))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calint_types::{MICROS_PER_DAY, MICROS_PER_MILLI, MICROS_PER_WEEK};

    #[test]
    fn negative_days() {
        assert_eq!(
            parse_single_unit(IntervalUnit::Day, "-5"),
            Ok(CalendarInterval::new(0, -432_000_000_000))
        );
    }

    #[test]
    fn month_class_units_fill_months() {
        assert_eq!(
            parse_single_unit(IntervalUnit::Year, "'3'"),
            Ok(CalendarInterval::new(36, 0))
        );
        assert_eq!(
            parse_single_unit(IntervalUnit::Month, "\"-7\""),
            Ok(CalendarInterval::new(-7, 0))
        );
    }

    #[test]
    fn time_units_scale_into_microseconds() {
        assert_eq!(
            parse_single_unit(IntervalUnit::Week, "2"),
            Ok(CalendarInterval::new(0, 2 * MICROS_PER_WEEK))
        );
        assert_eq!(
            parse_single_unit(IntervalUnit::Millisecond, "+15"),
            Ok(CalendarInterval::new(0, 15 * MICROS_PER_MILLI))
        );
        assert_eq!(
            parse_single_unit(IntervalUnit::Microsecond, "-9223372036854775808"),
            Ok(CalendarInterval::new(0, i64::MIN))
        );
    }

    #[test]
    fn bounds_protect_the_target_field() {
        assert_eq!(
            parse_single_unit(IntervalUnit::Year, "178956971"),
            Err(Error::out_of_range(
                "year",
                178956971,
                i64::from(i32::MIN / 12),
                i64::from(i32::MAX / 12)
            ))
        );
        assert!(matches!(
            parse_single_unit(IntervalUnit::Month, "2147483648"),
            Err(Error::OutOfRange { field: "month", .. })
        ));
        let max_days = i64::MAX / MICROS_PER_DAY;
        assert_eq!(
            parse_single_unit(IntervalUnit::Day, &max_days.to_string()),
            Ok(CalendarInterval::new(0, max_days * MICROS_PER_DAY))
        );
        assert!(matches!(
            parse_single_unit(IntervalUnit::Day, &(max_days + 1).to_string()),
            Err(Error::OutOfRange { field: "day", .. })
        ));
        assert!(matches!(
            parse_single_unit(IntervalUnit::Microsecond, "9223372036854775808"),
            Err(Error::OutOfRange {
                field: "microsecond",
                ..
            })
        ));
    }

    #[test]
    fn seconds_with_fraction() {
        assert_eq!(
            parse_single_unit(IntervalUnit::Second, "12"),
            Ok(CalendarInterval::new(0, 12_000_000))
        );
        assert_eq!(
            parse_single_unit(IntervalUnit::Second, "12.500000000"),
            Ok(CalendarInterval::new(0, 12_500_000))
        );
        assert_eq!(
            parse_single_unit(IntervalUnit::Second, ".123456789"),
            Ok(CalendarInterval::new(0, 123_456))
        );
        assert_eq!(
            parse_single_unit(IntervalUnit::Second, "7."),
            Ok(CalendarInterval::new(0, 7_000_000))
        );
    }

    #[test]
    fn fraction_is_a_raw_nanosecond_count() {
        assert_eq!(
            parse_single_unit(IntervalUnit::Second, "1.5"),
            Ok(CalendarInterval::new(0, 1_000_000))
        );
    }

    #[test]
    fn negative_seconds_add_the_fraction() {
        assert_eq!(
            parse_single_unit(IntervalUnit::Second, "-1.500000000"),
            Ok(CalendarInterval::new(0, -500_000))
        );
    }

    #[test]
    fn malformed_second_literals() {
        assert_eq!(
            parse_single_unit(IntervalUnit::Second, "1.2.3"),
            Err(Error::pattern_mismatch(
                "second-nano format of ss.nnnnnnnnn",
                "1.2.3"
            ))
        );
        assert_eq!(
            parse_single_unit(IntervalUnit::Second, "1.1000000000"),
            Err(Error::out_of_range("nanosecond", 1_000_000_000, 0, 999_999_999))
        );
        assert_eq!(
            parse_single_unit(IntervalUnit::Second, "1.-5"),
            Err(Error::out_of_range("nanosecond", -5, 0, 999_999_999))
        );
    }

    #[test]
    fn non_numeric_text_names_the_unit() {
        assert_eq!(
            parse_single_unit(IntervalUnit::Hour, "'1 2'"),
            Err(Error::pattern_mismatch("hour", "'1 2'"))
        );
        assert_eq!(
            parse_single_unit(IntervalUnit::Minute, ""),
            Err(Error::pattern_mismatch("minute", ""))
        );
    }

    #[test]
    fn units_by_name() {
        assert_eq!(
            parse_single_unit_named("hour", "2"),
            Ok(CalendarInterval::new(0, 7_200_000_000))
        );
        assert_eq!(
            parse_single_unit_named("fortnight", "2"),
            Err(Error::UnknownUnit("fortnight".into()))
        );
    }
}

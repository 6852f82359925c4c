//! Compact `[+|-]YEARS-MONTHS` literals, as written in `INTERVAL '1-2' YEAR TO MONTH`.

use calint_result::{Error, Result};
use calint_types::CalendarInterval;

use crate::scan::{Parsed, long_with_range, parse_byte, parse_digits, parse_sign, strip_quotes};

const FORM: &str = "year-month format of 'y-m'";

/// Parse a year-month literal such as `"-2014-8"` or `"'1-11'"`.
///
/// Years must lie in `[0, i32::MAX]` and months in `[0, 11]`. The sign applies to the
/// combined month count; the result never carries microseconds.
pub fn parse_year_month(input: &str) -> Result<CalendarInterval> {
    let body = strip_quotes(input.trim()).as_bytes();
    let mismatch = || Error::pattern_mismatch(FORM, input);

    let Parsed { value: sign, input: rest } = parse_sign(body);
    let Parsed {
        value: years,
        input: rest,
    } = parse_digits(rest).ok_or_else(mismatch)?;
    let rest = parse_byte(rest, b'-').ok_or_else(mismatch)?;
    let Parsed {
        value: months,
        input: rest,
    } = parse_digits(rest).ok_or_else(mismatch)?;
    if !rest.is_empty() {
        return Err(mismatch());
    }

    let years = long_with_range("year", years, 0, i64::from(i32::MAX), input)?;
    let months = long_with_range("month", months, 0, 11, input)?;
    // Both fields are range checked, so only the combined total can leave 32 bits.
    let total = (years as i32).wrapping_mul(12).wrapping_add(months as i32);
    let value = CalendarInterval::new((sign as i32).wrapping_mul(total), 0);
    tracing::trace!(input, months = value.months, "parsed year-month interval literal");
    Ok(value)
}

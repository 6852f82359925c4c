//! The nine units an interval literal can name.

use std::fmt;
use std::str::FromStr;

use calint_result::Error;

use crate::interval::{
    MICROS_PER_DAY, MICROS_PER_HOUR, MICROS_PER_MILLI, MICROS_PER_MINUTE, MICROS_PER_SECOND,
    MICROS_PER_WEEK,
};

/// A single interval unit, declared in canonical order from largest to smallest.
///
/// The derived ordering follows that canonical order, so `Year < Month < ... < Microsecond`.
/// Full-form literals must list their clauses in this order and the formatter emits them in
/// the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntervalUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Microsecond,
}

impl IntervalUnit {
    /// Every unit in canonical order.
    pub const ALL: [IntervalUnit; 9] = [
        IntervalUnit::Year,
        IntervalUnit::Month,
        IntervalUnit::Week,
        IntervalUnit::Day,
        IntervalUnit::Hour,
        IntervalUnit::Minute,
        IntervalUnit::Second,
        IntervalUnit::Millisecond,
        IntervalUnit::Microsecond,
    ];

    /// Lower-case singular name used in literals and in canonical output.
    pub const fn name(self) -> &'static str {
        match self {
            IntervalUnit::Year => "year",
            IntervalUnit::Month => "month",
            IntervalUnit::Week => "week",
            IntervalUnit::Day => "day",
            IntervalUnit::Hour => "hour",
            IntervalUnit::Minute => "minute",
            IntervalUnit::Second => "second",
            IntervalUnit::Millisecond => "millisecond",
            IntervalUnit::Microsecond => "microsecond",
        }
    }

    /// Microseconds per unit, or `None` for the month-class units that land in `months`.
    pub const fn micros_scale(self) -> Option<i64> {
        match self {
            IntervalUnit::Year | IntervalUnit::Month => None,
            IntervalUnit::Week => Some(MICROS_PER_WEEK),
            IntervalUnit::Day => Some(MICROS_PER_DAY),
            IntervalUnit::Hour => Some(MICROS_PER_HOUR),
            IntervalUnit::Minute => Some(MICROS_PER_MINUTE),
            IntervalUnit::Second => Some(MICROS_PER_SECOND),
            IntervalUnit::Millisecond => Some(MICROS_PER_MILLI),
            IntervalUnit::Microsecond => Some(1),
        }
    }

    /// Months per unit, or `None` for units stored as microseconds.
    pub const fn months_scale(self) -> Option<i64> {
        match self {
            IntervalUnit::Year => Some(12),
            IntervalUnit::Month => Some(1),
            _ => None,
        }
    }
}

impl fmt::Display for IntervalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IntervalUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntervalUnit::ALL
            .into_iter()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| Error::UnknownUnit(s.to_string()))
    }
}

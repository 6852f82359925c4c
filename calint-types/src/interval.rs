//! Calendar interval value stored as a combination of calendar months and microseconds.

use std::ops::{Add, Neg, Sub};

pub const MICROS_PER_MILLI: i64 = 1000;
pub const MICROS_PER_SECOND: i64 = MICROS_PER_MILLI * 1000;
pub const MICROS_PER_MINUTE: i64 = MICROS_PER_SECOND * 60;
pub const MICROS_PER_HOUR: i64 = MICROS_PER_MINUTE * 60;
pub const MICROS_PER_DAY: i64 = MICROS_PER_HOUR * 24;
pub const MICROS_PER_WEEK: i64 = MICROS_PER_DAY * 7;

/// Interval value stored as a combination of calendar months and microseconds.
///
/// Months capture both month and year components (12 months == 1 year). Microseconds hold
/// every sub-month unit, from weeks down to single microseconds. The two fields are never
/// folded into each other: a month has no fixed length, so `30 days` stays `30 days` and is
/// never promoted to `1 month`.
///
/// The plain arithmetic methods (`add`, `subtract`, `negate` and the matching operators) wrap
/// on overflow field by field. Use the `checked_*` variants where overflow must be observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CalendarInterval {
    pub months: i32,
    pub microseconds: i64,
}

impl CalendarInterval {
    pub const fn new(months: i32, microseconds: i64) -> Self {
        Self {
            months,
            microseconds,
        }
    }

    pub const fn zero() -> Self {
        Self::new(0, 0)
    }

    pub const fn is_zero(self) -> bool {
        self.months == 0 && self.microseconds == 0
    }

    /// Sub-month part of the interval in whole milliseconds, truncated toward zero.
    pub const fn milliseconds(self) -> i64 {
        self.microseconds / MICROS_PER_MILLI
    }

    #[allow(clippy::should_implement_trait)]
    pub const fn add(self, other: Self) -> Self {
        Self {
            months: self.months.wrapping_add(other.months),
            microseconds: self.microseconds.wrapping_add(other.microseconds),
        }
    }

    pub const fn subtract(self, other: Self) -> Self {
        Self {
            months: self.months.wrapping_sub(other.months),
            microseconds: self.microseconds.wrapping_sub(other.microseconds),
        }
    }

    pub const fn negate(self) -> Self {
        Self {
            months: self.months.wrapping_neg(),
            microseconds: self.microseconds.wrapping_neg(),
        }
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        Some(Self {
            months: self.months.checked_add(other.months)?,
            microseconds: self.microseconds.checked_add(other.microseconds)?,
        })
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        Some(Self {
            months: self.months.checked_sub(other.months)?,
            microseconds: self.microseconds.checked_sub(other.microseconds)?,
        })
    }

    pub fn checked_neg(self) -> Option<Self> {
        Some(Self {
            months: self.months.checked_neg()?,
            microseconds: self.microseconds.checked_neg()?,
        })
    }
}

impl Add for CalendarInterval {
    type Output = CalendarInterval;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        CalendarInterval::add(self, rhs)
    }
}

impl Sub for CalendarInterval {
    type Output = CalendarInterval;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl Neg for CalendarInterval {
    type Output = CalendarInterval;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

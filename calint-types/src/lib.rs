//! Value types shared across calint crates.
//!
//! [`CalendarInterval`] is the structured result of every interval literal parser: a count of
//! calendar months plus a count of microseconds. The crate also defines the unit-scale
//! constants, the [`IntervalUnit`] vocabulary, and the canonical `Display` rendering.

pub mod format;
pub mod interval;
pub mod unit;

pub use interval::{
    CalendarInterval, MICROS_PER_DAY, MICROS_PER_HOUR, MICROS_PER_MILLI, MICROS_PER_MINUTE,
    MICROS_PER_SECOND, MICROS_PER_WEEK,
};
pub use unit::IntervalUnit;

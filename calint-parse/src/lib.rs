//! Parse interval literals into [`CalendarInterval`] values.
//!
//! Four independent grammars are supported. The caller picks one based on the surrounding
//! syntax:
//!
//! - [`parse_interval`] / [`try_parse_interval`]: the full sentence form,
//!   `interval 1 year 2 days`.
//! - [`parse_year_month`]: the compact `[+|-]Y-M` form.
//! - [`parse_day_time_with_fields`]: the compact `[+|-][D ][H:]M:S[.n]` form with
//!   `from`/`to` field directives.
//! - [`parse_single_unit`]: one signed number tagged with an [`IntervalUnit`].
//!
//! Every parser is a pure function; there is no shared state to coordinate.

pub mod day_time;
pub mod full_form;
mod scan;
pub mod single_unit;
pub mod year_month;

pub use calint_types::{CalendarInterval, IntervalUnit};
pub use day_time::{
    DayTimeField, DayTimeOptions, parse_day_time, parse_day_time_with_fields,
    parse_day_time_with_options,
};
pub use full_form::{parse_interval, parse_interval_opt, try_parse_interval};
pub use single_unit::{parse_single_unit, parse_single_unit_named};
pub use year_month::parse_year_month;

//! Canonical full-form rendering for [`CalendarInterval`].

use std::fmt;

use crate::interval::CalendarInterval;
use crate::unit::IntervalUnit;

impl CalendarInterval {
    /// Split the value into one signed amount per unit, in canonical order.
    ///
    /// `months` is split into years and months, `microseconds` is peeled off unit by unit
    /// from weeks down to microseconds. Every step truncates toward zero, so each part keeps
    /// the sign of the field it came from.
    pub fn components(self) -> [(IntervalUnit, i64); 9] {
        let months = i64::from(self.months);
        let mut parts = [(IntervalUnit::Year, months / 12); 9];
        parts[1] = (IntervalUnit::Month, months % 12);

        let mut rest = self.microseconds;
        for (slot, unit) in parts.iter_mut().zip(IntervalUnit::ALL).skip(2) {
            // Only month-class units lack a micros scale and those are skipped above.
            let scale = unit.micros_scale().unwrap_or(1);
            *slot = (unit, rest / scale);
            rest %= scale;
        }
        parts
    }
}

impl fmt::Display for CalendarInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("interval")?;
        if self.is_zero() {
            return f.write_str(" 0 microseconds");
        }
        for (unit, value) in self.components() {
            if value != 0 {
                write!(f, " {value} {unit}s")?;
            }
        }
        Ok(())
    }
}

use std::fmt;

use thiserror::Error;

/// Unified error type for interval literal parsing.
///
/// Every strict parser in the workspace returns one of these variants. Each variant carries
/// the offending field name and/or the original literal text so diagnostics can point at the
/// exact input that was rejected.
///
/// # Error Handling Strategy
///
/// Errors propagate upward using Rust's `?` operator. The permissive full-form entry point
/// discards the variant entirely and reports an absent value instead; all other entry points
/// hand the variant back to the caller untouched.
///
/// # Thread Safety
///
/// `Error` implements `Send` and `Sync` and owns all of its data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The literal itself was absent.
    ///
    /// The payload names the literal form that was expected (for example `"interval"` or
    /// `"year-month"`). Callers working with nullable SQL values reach this variant through
    /// the `Option<&str>` entry points.
    #[error("Interval cannot be null ({0} literal)")]
    NullInput(&'static str),

    /// The literal was empty or contained only whitespace.
    #[error("Interval cannot be blank")]
    BlankInput,

    /// The literal consisted of the `interval` keyword and nothing else.
    #[error("Interval string must have time units")]
    MissingUnits,

    /// The literal does not follow the grammar of the requested form.
    ///
    /// `form` names the grammar (or, for single-unit literals, the unit) and `input` is the
    /// original text exactly as supplied by the caller.
    #[error("Interval string does not match {form} format: {input}")]
    PatternMismatch { form: &'static str, input: String },

    /// A numeric field fell outside its declared bounds.
    ///
    /// This also covers raw digit strings too long to fit a signed 64-bit integer. In that
    /// case `value` holds the digits as written and `min`/`max` are the bounds of the field
    /// that was being read.
    #[error("{field} {value} outside range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: String,
        min: i64,
        max: i64,
    },

    /// The day-time truncation directives do not describe a supported combination.
    #[error("Cannot support (interval '{input}' {from} to {to}) expression")]
    UnsupportedTruncation {
        input: String,
        from: String,
        to: String,
    },

    /// A unit or field name outside the supported vocabulary.
    #[error("unsupported interval unit '{0}'")]
    UnknownUnit(String),
}

impl Error {
    /// Create a pattern mismatch error for `form`, keeping a copy of the original input.
    #[inline]
    pub fn pattern_mismatch(form: &'static str, input: &str) -> Self {
        Error::PatternMismatch {
            form,
            input: input.to_string(),
        }
    }

    /// Create an out-of-range error from any displayable offending value.
    ///
    /// # Examples
    ///
    /// ```
    /// use calint_result::Error;
    ///
    /// let err = Error::out_of_range("month", 12, 0, 11);
    /// assert_eq!(err.to_string(), "month 12 outside range [0, 11]");
    /// ```
    #[inline]
    pub fn out_of_range<V: fmt::Display>(field: &'static str, value: V, min: i64, max: i64) -> Self {
        Error::OutOfRange {
            field,
            value: value.to_string(),
            min,
            max,
        }
    }

    /// Create an unsupported truncation error from any displayable directive pair.
    #[inline]
    pub fn unsupported_truncation<F, T>(input: &str, from: F, to: T) -> Self
    where
        F: fmt::Display,
        T: fmt::Display,
    {
        Error::UnsupportedTruncation {
            input: input.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// The original literal text carried by this error, if any.
    pub fn input(&self) -> Option<&str> {
        match self {
            Error::PatternMismatch { input, .. } | Error::UnsupportedTruncation { input, .. } => {
                Some(input)
            }
            _ => None,
        }
    }
}

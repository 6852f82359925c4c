use crate::error::Error;

/// Result type alias used throughout calint.
///
/// This is a type alias for `std::result::Result<T, Error>`, providing a convenient
/// shorthand for every parser that can reject its input.
pub type Result<T> = std::result::Result<T, Error>;

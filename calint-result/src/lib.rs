//! Error types and result definitions for the calint interval toolkit.
//!
//! This crate provides the unified error type ([`Error`]) and result type alias
//! ([`Result<T>`]) used by every `calint` crate. All parsers that can fail return
//! `Result<T>`, where the error variant describes which part of the literal was rejected.
//!
//! # Error Categories
//!
//! - **Absent or empty input** ([`Error::NullInput`], [`Error::BlankInput`],
//!   [`Error::MissingUnits`])
//! - **Grammar violations** ([`Error::PatternMismatch`]): the text is not a literal of the
//!   requested form
//! - **Bounds violations** ([`Error::OutOfRange`]): a field parsed but its value is not
//!   representable, including digit strings that overflow 64 bits
//! - **Directive errors** ([`Error::UnsupportedTruncation`], [`Error::UnknownUnit`])

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;

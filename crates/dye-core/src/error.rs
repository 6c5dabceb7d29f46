//! Error types for dye-core operations.
//!
//! This module provides a unified error type for everything the core can
//! reject: unsupported color spaces, malformed channel data and malformed
//! textual color expressions.
//!
//! # Overview
//!
//! The [`Error`] enum covers failures that occur during:
//! - Space registry lookups (metadata for a declared but unregistered space)
//! - Color construction (channel count does not match the space)
//! - Space conversion (target space has no converter)
//! - Expression parsing (hex and functional notation)
//!
//! Errors are raised at the point of detection and never recovered
//! internally. Out-of-range channel values are *not* errors.
//!
//! # Usage
//!
//! ```rust
//! use dye_core::{Color, ColorSpace, Error};
//!
//! let err = Color::create(ColorSpace::Rgb, &[1.0, 2.0]).unwrap_err();
//! assert!(matches!(err, Error::ChannelCountMismatch { expected: 3, got: 2, .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core color operations.
///
/// # Categories
///
/// - **Registry errors**: [`UnknownSpace`](Error::UnknownSpace)
/// - **Construction errors**: [`ChannelCountMismatch`](Error::ChannelCountMismatch)
/// - **Expression errors**: [`InvalidHexExpression`](Error::InvalidHexExpression),
///   [`InvalidFunctionExpression`](Error::InvalidFunctionExpression),
///   [`ArgumentCountMismatch`](Error::ArgumentCountMismatch),
///   [`InvalidArgumentFormat`](Error::InvalidArgumentFormat)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The color space is unknown or has no registered metadata/converter.
    ///
    /// Returned for names that do not denote a color space at all and for
    /// spaces that are declared (HSV, CMYK, XYZ, LAB) but not implemented.
    #[error("unknown color space: {name}")]
    UnknownSpace {
        /// Name of the space as requested
        name: String,
    },

    /// Channel data length does not match the color space.
    #[error("{space} expects {expected} channels, got {got}")]
    ChannelCountMismatch {
        /// Space name
        space: String,
        /// Channel count of the space
        expected: usize,
        /// Length of the data provided
        got: usize,
    },

    /// Hex expression failed the `#` + 3/6 hex digit shape check.
    #[error("invalid hex color expression '{expr}': expected # followed by 3 or 6 hex digits")]
    InvalidHexExpression {
        /// The rejected input
        expr: String,
    },

    /// Functional expression does not match `name(args)`.
    #[error("invalid color function expression '{expr}'")]
    InvalidFunctionExpression {
        /// The rejected input
        expr: String,
    },

    /// Functional expression has the wrong number of arguments.
    #[error("invalid number of arguments given to {space}(), expected {expected}, got {got}")]
    ArgumentCountMismatch {
        /// Space name
        space: String,
        /// Channel count of the space
        expected: usize,
        /// Argument count found
        got: usize,
    },

    /// A single functional argument is not `<number><unit>?`.
    #[error("invalid argument format for argument '{arg}'")]
    InvalidArgumentFormat {
        /// The rejected argument
        arg: String,
    },
}

impl Error {
    /// Creates an [`Error::UnknownSpace`] error.
    #[inline]
    pub fn unknown_space(name: impl Into<String>) -> Self {
        Self::UnknownSpace { name: name.into() }
    }

    /// Creates an [`Error::ChannelCountMismatch`] error.
    #[inline]
    pub fn channel_count_mismatch(space: impl Into<String>, expected: usize, got: usize) -> Self {
        Self::ChannelCountMismatch {
            space: space.into(),
            expected,
            got,
        }
    }

    /// Creates an [`Error::InvalidHexExpression`] error.
    #[inline]
    pub fn invalid_hex(expr: impl Into<String>) -> Self {
        Self::InvalidHexExpression { expr: expr.into() }
    }

    /// Creates an [`Error::InvalidFunctionExpression`] error.
    #[inline]
    pub fn invalid_function(expr: impl Into<String>) -> Self {
        Self::InvalidFunctionExpression { expr: expr.into() }
    }

    /// Creates an [`Error::ArgumentCountMismatch`] error.
    #[inline]
    pub fn argument_count_mismatch(space: impl Into<String>, expected: usize, got: usize) -> Self {
        Self::ArgumentCountMismatch {
            space: space.into(),
            expected,
            got,
        }
    }

    /// Creates an [`Error::InvalidArgumentFormat`] error.
    #[inline]
    pub fn invalid_argument(arg: impl Into<String>) -> Self {
        Self::InvalidArgumentFormat { arg: arg.into() }
    }

    /// Returns `true` if this error came from parsing a textual expression.
    #[inline]
    pub fn is_expression_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidHexExpression { .. }
                | Self::InvalidFunctionExpression { .. }
                | Self::ArgumentCountMismatch { .. }
                | Self::InvalidArgumentFormat { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_space_message() {
        let err = Error::unknown_space("hsv");
        assert_eq!(err.to_string(), "unknown color space: hsv");
        assert!(!err.is_expression_error());
    }

    #[test]
    fn test_argument_count_message() {
        let err = Error::argument_count_mismatch("hsl", 3, 2);
        let msg = err.to_string();
        assert!(msg.contains("hsl()"));
        assert!(msg.contains("expected 3, got 2"));
        assert!(err.is_expression_error());
    }

    #[test]
    fn test_hex_message_contains_input() {
        let err = Error::invalid_hex("#12");
        assert!(err.to_string().contains("#12"));
    }
}

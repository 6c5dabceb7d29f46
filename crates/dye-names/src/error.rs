//! Error types for the name registry.

use thiserror::Error;

/// Result type for name registry operations.
pub type NamesResult<T> = Result<T, NamesError>;

/// Errors that can occur when registering or searching names.
#[derive(Debug, Error)]
pub enum NamesError {
    /// A registered name must be non-empty ASCII letters, digits, `_` or `-`.
    ///
    /// Other names would either never resolve or shadow hex and functional
    /// expressions during parsing.
    #[error("invalid color name '{name}': use ASCII letters, digits, '_' or '-'")]
    InvalidName {
        /// The rejected name.
        name: String,
    },

    /// Search pattern is not a valid regular expression.
    #[error("invalid name pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
}

//! Error types for derivation operations.

use thiserror::Error;

/// Error type for mixing and scheme operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// Mix mode name not recognized.
    #[error("unknown mix mode '{mode}' (expected additive, subtractive or average)")]
    UnknownMixMode {
        /// The rejected mode name.
        mode: String,
    },

    /// Scheme kind name not recognized.
    #[error("unknown scheme kind '{kind}'")]
    UnknownSchemeKind {
        /// The rejected kind name.
        kind: String,
    },
}

/// Result type for derivation operations.
pub type OpsResult<T> = Result<T, OpsError>;

//! Unified error type for the facade.

use thiserror::Error;

/// Any error produced through the `dye` facade.
#[derive(Debug, Error)]
pub enum DyeError {
    /// Space lookup, construction or expression parsing failed.
    #[error(transparent)]
    Core(#[from] dye_core::Error),

    /// Mixing or scheme selection failed.
    #[error(transparent)]
    Ops(#[from] dye_ops::OpsError),

    /// Name registration or search failed.
    #[error(transparent)]
    Names(#[from] dye_names::NamesError),
}

/// Result type for facade operations.
pub type DyeResult<T> = Result<T, DyeError>;

//! # dye
//!
//! A color value library: colors in RGB, RGBA, HSL and HSLA, conversion
//! between them, CSS-style hex and functional expressions, channel
//! adjustments, mixing and color schemes.
//!
//! This crate re-exports the pieces and adds the unified entry points:
//!
//! - [`parse_color`] - named, hex or functional expression to [`Color`]
//! - [`dye!`] - the same, over string literal fragments
//! - [`ColorExt`] - mixing and schemes as methods
//!
//! ## Quick Start
//!
//! ```rust
//! use dye::prelude::*;
//!
//! let base = parse_color("cornflowerBlue")?;
//! let darker = base.darken(0.1);
//! let overlay = dye!("rgba(" "0, 0, 0, " ".5)")?;
//!
//! println!("{}", darker.mix_with(&overlay, MixMode::Average));
//! # Ok::<(), dye::DyeError>(())
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! dye (this crate)
//!    |
//!    +-- dye-core   (spaces, colors, conversion, channels, expressions)
//!    +-- dye-names  (named color registry)
//!    +-- dye-ops    (mixing, schemes)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - forwards to `dye-core/serde`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod ext;
mod parse;

pub use dye_core as core;
pub use dye_names as names;
pub use dye_ops as ops;

pub use dye_core::{convert, expr, math, space, Color, ColorSpace, ColorUnit, ValueType};
pub use dye_ops::{mix, MixMode, Scheme, SchemeGeneration, SchemeKind, SchemeOptions};
pub use error::{DyeError, DyeResult};
pub use ext::ColorExt;
pub use parse::parse_color;

/// Parses string literal fragments, joined, as a color expression.
///
/// Resolution is the same as [`parse_color`]: names first, then hex, then
/// functional notation. Evaluates to a [`DyeResult<Color>`](DyeResult).
///
/// ```
/// use dye::{dye, Color};
///
/// assert_eq!(dye!("black")?, Color::rgb(0.0, 0.0, 0.0));
/// assert_eq!(dye!("rgb(" "25%, 127, 75%" ")")?, Color::rgb(64.0, 127.0, 191.0));
/// # Ok::<(), dye::DyeError>(())
/// ```
#[macro_export]
macro_rules! dye {
    ($($fragment:literal)+) => {
        $crate::parse_color(concat!($($fragment),+))
    };
}

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use dye::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dye;
    pub use crate::error::{DyeError, DyeResult};
    pub use crate::ext::ColorExt;
    pub use crate::parse::parse_color;
    pub use dye_core::prelude::*;
    pub use dye_ops::{MixMode, Scheme, SchemeKind, SchemeOptions};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_joins_fragments() {
        assert_eq!(dye!("#" "fff").unwrap(), Color::rgb(255.0, 255.0, 255.0));
        assert_eq!(
            dye!("hsla(" "50%, 0.1, 25%, .4" ")").unwrap(),
            Color::hsla(180.0, 0.1, 0.25, 0.4)
        );
        assert!(dye!("#" "12").is_err());
    }

    #[test]
    fn test_error_conversions() {
        let err: DyeError = "screen".parse::<MixMode>().unwrap_err().into();
        assert!(matches!(err, DyeError::Ops(_)));
        assert!(err.to_string().contains("screen"));
    }
}

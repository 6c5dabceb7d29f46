//! Mixing two colors.
//!
//! Both operands are read in the RGB family, with a missing alpha taken as 1.
//! Color channels are combined per [`MixMode`] and capped at their scale;
//! alpha is always averaged. The result is opaque RGB when the averaged alpha
//! is 1, RGBA otherwise.
//!
//! # Mix Modes
//!
//! | Mode                      | Per channel              |
//! |---------------------------|--------------------------|
//! | [`MixMode::Additive`]     | `min(scale, a + b)`      |
//! | [`MixMode::Subtractive`]  | `min(scale, a * b / scale)` |
//! | [`MixMode::Average`]      | `min(scale, (a + b) / 2)` |
//!
//! # Example
//!
//! ```rust
//! use dye_core::Color;
//! use dye_ops::mix::{mix, MixMode};
//!
//! let red = Color::rgb(255.0, 0.0, 0.0);
//! let blue = Color::rgb(0.0, 0.0, 255.0);
//!
//! assert_eq!(mix(&red, &blue, MixMode::Additive), Color::rgb(255.0, 0.0, 255.0));
//! assert_eq!(mix(&red, &blue, MixMode::Subtractive), Color::rgb(0.0, 0.0, 0.0));
//! assert_eq!(mix(&red, &blue, MixMode::Average), Color::rgb(127.5, 0.0, 127.5));
//! ```

use std::fmt;
use std::str::FromStr;

use dye_core::Color;
use tracing::trace;

use crate::{OpsError, OpsResult};

/// Rule for combining two color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MixMode {
    /// Sum, like overlapping lights.
    Additive,
    /// Normalized product, like overlapping filters.
    #[default]
    Subtractive,
    /// Arithmetic mean.
    Average,
}

impl MixMode {
    /// All modes.
    pub const ALL: [MixMode; 3] = [Self::Additive, Self::Subtractive, Self::Average];

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Additive => "additive",
            Self::Subtractive => "subtractive",
            Self::Average => "average",
        }
    }

    /// Combines two channel values of the given scale.
    #[inline]
    pub fn apply(self, a: f64, b: f64, scale: f64) -> f64 {
        let mixed = match self {
            Self::Additive => a + b,
            Self::Subtractive => a * b / scale,
            Self::Average => (a + b) / 2.0,
        };
        scale.min(mixed)
    }
}

impl fmt::Display for MixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MixMode {
    type Err = OpsError;

    /// Accepts the short names and the `rgb`-prefixed camelCase forms
    /// (`rgbAdditive`, `rgbSubtractive`, `rgbAverage`).
    fn from_str(s: &str) -> OpsResult<Self> {
        match s {
            "additive" | "rgbAdditive" => Ok(Self::Additive),
            "subtractive" | "rgbSubtractive" => Ok(Self::Subtractive),
            "average" | "rgbAverage" => Ok(Self::Average),
            _ => Err(OpsError::UnknownMixMode { mode: s.to_string() }),
        }
    }
}

/// Mixes `color` with `other` under `mode`.
pub fn mix(color: &Color, other: &Color, mode: MixMode) -> Color {
    // RGBA view of both operands; opaque colors read alpha 1.
    let a = color.to_rgba();
    let b = other.to_rgba();
    let specs = a.metadata().channels;
    let (a, b) = (a.data(), b.data());

    let out: [f64; 4] = std::array::from_fn(|i| {
        let rule = if i == 3 { MixMode::Average } else { mode };
        rule.apply(a[i], b[i], specs[i].scale)
    });

    trace!(mode = %mode, alpha = out[3], "mix");
    if out[3] < 1.0 {
        Color::rgba(out[0], out[1], out[2], out[3])
    } else {
        Color::rgb(out[0], out[1], out[2])
    }
}

/// Mixes with a mode given by name.
///
/// # Errors
///
/// [`OpsError::UnknownMixMode`] if `mode` is not a known mode name.
pub fn mix_named(color: &Color, other: &Color, mode: &str) -> OpsResult<Color> {
    Ok(mix(color, other, mode.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mode_names() {
        for mode in MixMode::ALL {
            assert_eq!(mode.to_string().parse::<MixMode>().unwrap(), mode);
        }
        assert_eq!("rgbAverage".parse::<MixMode>().unwrap(), MixMode::Average);
        assert_eq!(MixMode::default(), MixMode::Subtractive);
        assert_eq!(
            "multiply".parse::<MixMode>().unwrap_err(),
            OpsError::UnknownMixMode { mode: "multiply".into() }
        );
    }

    #[test]
    fn test_channels_are_capped() {
        let a = Color::rgb(200.0, 100.0, 10.0);
        let b = Color::rgb(100.0, 100.0, 10.0);
        assert_eq!(mix(&a, &b, MixMode::Additive), Color::rgb(255.0, 200.0, 20.0));
    }

    #[test]
    fn test_subtractive() {
        let a = Color::rgb(255.0, 127.5, 0.0);
        let b = Color::rgb(255.0, 255.0, 255.0);
        let out = mix(&a, &b, MixMode::Subtractive);
        assert_abs_diff_eq!(out.red(), 255.0, epsilon = 1e-9);
        assert_abs_diff_eq!(out.green(), 127.5, epsilon = 1e-9);
        assert_eq!(out.blue(), 0.0);
    }

    #[test]
    fn test_alpha_is_always_averaged() {
        let a = Color::rgba(0.0, 0.0, 0.0, 0.5);
        let b = Color::rgb(0.0, 0.0, 0.0);
        for mode in MixMode::ALL {
            let out = mix(&a, &b, mode);
            assert!(out.is_rgba());
            assert_eq!(out.opacity(), 0.75);
        }
    }

    #[test]
    fn test_opaque_result_is_rgb() {
        let a = Color::hsla(0.0, 1.0, 0.5, 1.0);
        let b = Color::hsl(240.0, 1.0, 0.5);
        assert!(mix(&a, &b, MixMode::Average).is_rgb());
    }

    #[test]
    fn test_average_with_self_is_identity() {
        for c in [
            Color::rgb(12.0, 200.0, 99.0),
            Color::rgba(1.0, 2.0, 3.0, 0.4),
            Color::rgb(255.0, 255.0, 255.0),
        ] {
            assert_eq!(mix(&c, &c, MixMode::Average), c);
        }
    }

    #[test]
    fn test_mix_named() {
        let a = Color::rgb(10.0, 20.0, 30.0);
        assert_eq!(mix_named(&a, &a, "rgbAdditive").unwrap(), Color::rgb(20.0, 40.0, 60.0));
        assert!(mix_named(&a, &a, "screen").is_err());
    }
}

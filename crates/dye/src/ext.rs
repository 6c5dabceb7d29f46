//! Method-style access to mixing and schemes.

use dye_core::Color;
use dye_ops::{MixMode, Scheme, SchemeKind, SchemeOptions};

/// Chainable derivations on [`Color`].
///
/// # Example
///
/// ```
/// use dye::prelude::*;
///
/// let accent = dye!("hsl(200, 50%, 40%)")?
///     .mix_with(&Color::rgb(255.0, 255.0, 255.0), MixMode::Average)
///     .complement_default();
/// let shades = accent.scheme(SchemeKind::Light, SchemeOptions::default());
/// assert_eq!(shades.len(), 4);
/// # Ok::<(), dye::DyeError>(())
/// ```
pub trait ColorExt {
    /// Mixes with `other`. See [`dye_ops::mix()`].
    fn mix_with(&self, other: &Color, mode: MixMode) -> Color;

    /// Builds a named scheme around this color.
    fn scheme(&self, kind: SchemeKind, options: SchemeOptions) -> Scheme;
}

impl ColorExt for Color {
    fn mix_with(&self, other: &Color, mode: MixMode) -> Color {
        dye_ops::mix(self, other, mode)
    }

    fn scheme(&self, kind: SchemeKind, options: SchemeOptions) -> Scheme {
        kind.build(self, options)
    }
}

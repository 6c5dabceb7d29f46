//! Logical channel getters, withers and derived adjustments.
//!
//! Every logical channel is read and written regardless of the color's
//! current space: the color is force-converted into the family that owns the
//! channel (RGB for red/green/blue, HSL for hue/saturation/lightness), and
//! results keep the alpha-ness of the source. Opacity reads and writes go
//! through the alpha variant of the current family.
//!
//! Nothing here clamps. `lighten(2.0)` on a mid-gray yields a lightness of
//! 2.5 and that value is kept as-is.
//!
//! # Usage
//!
//! ```
//! use dye_core::Color;
//!
//! let red = Color::rgb(255.0, 0.0, 0.0);
//! assert_eq!(red.hue(), 0.0);
//!
//! let lighter = red.lighten(0.25);
//! assert!(lighter.is_hsl());
//! assert_eq!(lighter.lightness(), 0.75);
//!
//! let cyan = red.complement_default();
//! assert_eq!(cyan.hue(), 180.0);
//! ```

use crate::color::{Channels, Color};
use crate::math::rotate_value;
use crate::space::{HSL_METADATA, RGB_METADATA};

/// Hue offset used by [`Color::complement_default`].
pub const DEFAULT_COMPLEMENT_OFFSET: f64 = 180.0;

const RED: usize = 0;
const GREEN: usize = 1;
const BLUE: usize = 2;
const HUE: usize = 0;
const SATURATION: usize = 1;
const LIGHTNESS: usize = 2;

/// Copies `base` with channel `index` replaced. `base` already has the
/// target family and alpha-ness.
fn replace(base: Color, index: usize, value: f64) -> Color {
    let mut data = Channels::from_slice(base.data());
    data[index] = value;
    Color::from_parts(base.model(), data)
}

impl Color {
    /// Red channel (`0..=255`).
    pub fn red(&self) -> f64 {
        self.to_any_rgb().data()[RED]
    }

    /// Green channel (`0..=255`).
    pub fn green(&self) -> f64 {
        self.to_any_rgb().data()[GREEN]
    }

    /// Blue channel (`0..=255`).
    pub fn blue(&self) -> f64 {
        self.to_any_rgb().data()[BLUE]
    }

    /// Hue in degrees (`0..=360`).
    pub fn hue(&self) -> f64 {
        self.to_any_hsl().data()[HUE]
    }

    /// Saturation (`0..=1`).
    pub fn saturation(&self) -> f64 {
        self.to_any_hsl().data()[SATURATION]
    }

    /// Lightness (`0..=1`).
    pub fn lightness(&self) -> f64 {
        self.to_any_hsl().data()[LIGHTNESS]
    }

    /// Opacity (`0..=1`); `1` for opaque colors.
    pub fn opacity(&self) -> f64 {
        let alpha = self.to_any_alpha();
        alpha.data()[alpha.data().len() - 1]
    }

    /// Returns an RGB-family copy with red replaced.
    pub fn with_red(&self, value: f64) -> Color {
        replace(self.to_any_rgb(), RED, value)
    }

    /// Returns an RGB-family copy with green replaced.
    pub fn with_green(&self, value: f64) -> Color {
        replace(self.to_any_rgb(), GREEN, value)
    }

    /// Returns an RGB-family copy with blue replaced.
    pub fn with_blue(&self, value: f64) -> Color {
        replace(self.to_any_rgb(), BLUE, value)
    }

    /// Returns an HSL-family copy with hue replaced.
    pub fn with_hue(&self, value: f64) -> Color {
        replace(self.to_any_hsl(), HUE, value)
    }

    /// Returns an HSL-family copy with saturation replaced.
    pub fn with_saturation(&self, value: f64) -> Color {
        replace(self.to_any_hsl(), SATURATION, value)
    }

    /// Returns an HSL-family copy with lightness replaced.
    pub fn with_lightness(&self, value: f64) -> Color {
        replace(self.to_any_hsl(), LIGHTNESS, value)
    }

    /// Returns an alpha copy (HSLA for HSL colors, RGBA otherwise) with
    /// opacity replaced.
    pub fn with_opacity(&self, value: f64) -> Color {
        let alpha = self.to_any_alpha();
        let last = alpha.data().len() - 1;
        replace(alpha, last, value)
    }

    /// Inverts red, green and blue against their scales, keeping alpha.
    ///
    /// ```
    /// use dye_core::Color;
    ///
    /// let c = Color::rgba(0.0, 55.0, 255.0, 0.5).invert();
    /// assert_eq!(c.data(), &[255.0, 200.0, 0.0, 0.5]);
    /// ```
    pub fn invert(&self) -> Color {
        let rgb = self.to_any_rgb();
        let mut data = Channels::from_slice(rgb.data());
        for (value, spec) in data.iter_mut().zip(RGB_METADATA.channels) {
            *value = spec.scale - *value;
        }
        Color::from_parts(rgb.model(), data)
    }

    /// Sets saturation to zero.
    pub fn grayscale(&self) -> Color {
        self.with_saturation(0.0)
    }

    /// Rotates the hue by `offset` degrees, wrapping into `[0, 360]`.
    pub fn complement(&self, offset: f64) -> Color {
        let scale = HSL_METADATA.channels[HUE].scale;
        self.with_hue(rotate_value(self.hue() + offset, scale))
    }

    /// Rotates the hue by [`DEFAULT_COMPLEMENT_OFFSET`] degrees.
    pub fn complement_default(&self) -> Color {
        self.complement(DEFAULT_COMPLEMENT_OFFSET)
    }

    /// Adds `delta` to lightness.
    pub fn lighten(&self, delta: f64) -> Color {
        self.with_lightness(self.lightness() + delta)
    }

    /// Subtracts `delta` from lightness.
    pub fn darken(&self, delta: f64) -> Color {
        self.with_lightness(self.lightness() - delta)
    }

    /// Adds `delta` to saturation.
    pub fn tint(&self, delta: f64) -> Color {
        self.with_saturation(self.saturation() + delta)
    }

    /// Subtracts `delta` from saturation.
    pub fn tone(&self, delta: f64) -> Color {
        self.with_saturation(self.saturation() - delta)
    }

    /// Adds `delta` to opacity.
    pub fn fade_in(&self, delta: f64) -> Color {
        self.with_opacity(self.opacity() + delta)
    }

    /// Subtracts `delta` from opacity.
    pub fn fade_out(&self, delta: f64) -> Color {
        self.with_opacity(self.opacity() - delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::ColorSpace;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_getters_convert_as_needed() {
        let hsl = Color::hsl(120.0, 1.0, 0.5);
        assert_abs_diff_eq!(hsl.green(), 255.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hsl.red(), 0.0, epsilon = 1e-9);

        let rgb = Color::rgb(0.0, 0.0, 255.0);
        assert_eq!(rgb.hue(), 240.0);
        assert_eq!(rgb.saturation(), 1.0);
        assert_eq!(rgb.lightness(), 0.5);
    }

    #[test]
    fn test_opacity() {
        assert_eq!(Color::rgb(1.0, 2.0, 3.0).opacity(), 1.0);
        assert_eq!(Color::hsla(1.0, 0.2, 0.3, 0.4).opacity(), 0.4);
        assert_eq!(Color::rgba(1.0, 2.0, 3.0, 0.6).opacity(), 0.6);
    }

    #[test]
    fn test_withers_keep_alpha_ness() {
        let opaque = Color::hsl(0.0, 1.0, 0.5).with_red(10.0);
        assert_eq!(opaque.space(), ColorSpace::Rgb);
        assert_eq!(opaque.red(), 10.0);

        let alpha = Color::rgba(255.0, 0.0, 0.0, 0.5).with_hue(120.0);
        assert_eq!(alpha.space(), ColorSpace::Hsla);
        assert_eq!(alpha.data(), &[120.0, 1.0, 0.5, 0.5]);
    }

    #[test]
    fn test_with_opacity_picks_family() {
        let hsla = Color::hsl(10.0, 0.5, 0.5).with_opacity(0.2);
        assert_eq!(hsla.data(), &[10.0, 0.5, 0.5, 0.2]);

        let rgba = Color::rgb(1.0, 2.0, 3.0).with_opacity(0.2);
        assert_eq!(rgba.data(), &[1.0, 2.0, 3.0, 0.2]);
    }

    #[test]
    fn test_invert_opaque() {
        let c = Color::rgb(0.0, 100.0, 255.0).invert();
        assert_eq!(c.data(), &[255.0, 155.0, 0.0]);
    }

    #[test]
    fn test_grayscale() {
        let g = Color::hsla(200.0, 0.8, 0.4, 0.9).grayscale();
        assert_eq!(g.data(), &[200.0, 0.0, 0.4, 0.9]);
    }

    #[test]
    fn test_complement_wraps() {
        let c = Color::hsl(300.0, 1.0, 0.5);
        assert_eq!(c.complement_default().hue(), 120.0);
        assert_eq!(c.complement(-330.0).hue(), 330.0);
        assert_eq!(c.complement(60.0).hue(), 360.0);
    }

    #[test]
    fn test_adjustments() {
        let c = Color::hsl(0.0, 0.5, 0.5);
        assert_eq!(c.lighten(0.25).lightness(), 0.75);
        assert_eq!(c.darken(0.25).lightness(), 0.25);
        assert_eq!(c.tint(0.25).saturation(), 0.75);
        assert_eq!(c.tone(0.25).saturation(), 0.25);
        assert_eq!(c.fade_out(0.25).opacity(), 0.75);
        assert_eq!(c.fade_out(0.5).fade_in(0.25).opacity(), 0.75);
    }

    #[test]
    fn test_mutators_do_not_clamp() {
        let c = Color::hsla(0.0, 0.5, 0.5, 0.5);
        assert_eq!(c.lighten(2.0).lightness(), 2.5);
        assert_eq!(c.darken(1.0).lightness(), -0.5);
        assert_eq!(c.tint(1.0).saturation(), 1.5);
        assert_eq!(c.tone(0.75).saturation(), -0.25);
        assert_eq!(c.fade_in(1.0).opacity(), 1.5);
        assert_eq!(c.fade_out(1.0).opacity(), -0.5);
        assert_eq!(Color::rgb(0.0, 0.0, 0.0).with_red(300.0).red(), 300.0);
    }
}

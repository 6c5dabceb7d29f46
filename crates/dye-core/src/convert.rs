//! Conversion between the registered color spaces.
//!
//! Every pair of registered spaces has a converter. Same-space entries copy,
//! cross-family entries chain through the opaque spaces (RGBA to HSLA goes
//! RGBA -> RGB -> HSL and reattaches the alpha).
//!
//! # Alpha handling
//!
//! - Alpha to opaque: alpha is dropped.
//! - Opaque to alpha: alpha is set to `1`.
//! - Alpha to alpha: alpha is passed through unchanged, across families too.
//!
//! # Usage
//!
//! ```
//! use dye_core::{convert, Color, ColorSpace};
//!
//! let hsl = convert(&Color::rgb(255.0, 0.0, 0.0), ColorSpace::Hsl).unwrap();
//! assert_eq!(hsl, Color::hsl(0.0, 1.0, 0.5));
//!
//! // Force-convert helpers never fail.
//! let rgba = Color::hsla(0.0, 1.0, 0.5, 0.25).to_rgba();
//! assert_eq!(rgba.data(), &[255.0, 0.0, 0.0, 0.25]);
//!
//! assert!(convert(&hsl, ColorSpace::Lab).is_err());
//! ```

use smallvec::SmallVec;
use tracing::trace;

use crate::color::{Channels, Color, Model};
use crate::error::Result;
use crate::space::{ColorSpace, HSL_METADATA, RGB_METADATA};

/// A converter from one registered space into another.
type Converter = fn(&Color) -> Color;

/// Converts `color` into `target`.
///
/// Returns a copy when the color is already in `target`.
///
/// # Errors
///
/// [`Error::UnknownSpace`](crate::Error::UnknownSpace) if `target` has no
/// registered converter.
pub fn convert(color: &Color, target: ColorSpace) -> Result<Color> {
    let target = Model::from_space(target)?;
    Ok(convert_model(color, target))
}

/// Infallible conversion between registered spaces.
pub(crate) fn convert_model(color: &Color, target: Model) -> Color {
    let source = color.model();
    trace!(from = %source.space(), to = %target.space(), "convert");
    converter(source, target)(color)
}

/// The full pairwise converter table.
fn converter(from: Model, to: Model) -> Converter {
    use Model::*;
    match (from, to) {
        (Rgb, Rgb) | (Rgba, Rgba) | (Hsl, Hsl) | (Hsla, Hsla) => copy,

        (Rgb, Rgba) => rgb_to_rgba,
        (Rgb, Hsl) => rgb_to_hsl_color,
        (Rgb, Hsla) => rgb_to_hsla,

        (Rgba, Rgb) => drop_alpha,
        (Rgba, Hsl) => rgba_to_hsl,
        (Rgba, Hsla) => rgba_to_hsla,

        (Hsl, Rgb) => hsl_to_rgb_color,
        (Hsl, Rgba) => hsl_to_rgba,
        (Hsl, Hsla) => hsl_to_hsla,

        (Hsla, Rgb) => hsla_to_rgb,
        (Hsla, Rgba) => hsla_to_rgba,
        (Hsla, Hsl) => drop_alpha,
    }
}

/// Converts scaled RGB channels (`0..=255`) into scaled HSL channels
/// (hue in `0..=360`, saturation and lightness in `0..=1`).
///
/// Achromatic inputs (`max == min`) produce zero hue and saturation.
///
/// # Example
///
/// ```
/// use dye_core::convert::rgb_to_hsl;
///
/// assert_eq!(rgb_to_hsl([0.0, 255.0, 0.0]), [120.0, 1.0, 0.5]);
/// assert_eq!(rgb_to_hsl([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
/// ```
pub fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let rgb_scales = RGB_METADATA.channels;
    let r = rgb[0] / rgb_scales[0].scale;
    let g = rgb[1] / rgb_scales[1].scale;
    let b = rgb[2] / rgb_scales[2].scale;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let mut h = 0.0;
    let mut s = 0.0;

    if max != min {
        let d = max - min;
        s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h /= 6.0;
    }

    let hsl_scales = HSL_METADATA.channels;
    [h * hsl_scales[0].scale, s * hsl_scales[1].scale, l * hsl_scales[2].scale]
}

/// Converts scaled HSL channels into scaled RGB channels.
///
/// The result is not rounded; `hsl(180, .5, .5)` yields `(63.75, 191.25, 191.25)`.
///
/// # Example
///
/// ```
/// use dye_core::convert::hsl_to_rgb;
///
/// assert_eq!(hsl_to_rgb([240.0, 1.0, 0.5]), [0.0, 0.0, 255.0]);
/// assert_eq!(hsl_to_rgb([0.0, 0.0, 1.0]), [255.0, 255.0, 255.0]);
/// ```
pub fn hsl_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let hsl_scales = HSL_METADATA.channels;
    let h = hsl[0] / hsl_scales[0].scale;
    let s = hsl[1] / hsl_scales[1].scale;
    let l = hsl[2] / hsl_scales[2].scale;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    };

    let rgb_scales = RGB_METADATA.channels;
    [r * rgb_scales[0].scale, g * rgb_scales[1].scale, b * rgb_scales[2].scale]
}

/// One RGB component from the `p`/`q` intermediates at hue offset `t`.
#[inline]
fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

// Table entries

#[inline]
fn triple(color: &Color) -> [f64; 3] {
    let d = color.data();
    [d[0], d[1], d[2]]
}

#[inline]
fn alpha(color: &Color) -> f64 {
    color.data()[3]
}

#[inline]
fn opaque(model: Model, c: [f64; 3]) -> Color {
    Color::from_parts(model, SmallVec::from_buf_and_len([c[0], c[1], c[2], 0.0], 3))
}

#[inline]
fn translucent(model: Model, c: [f64; 3], a: f64) -> Color {
    Color::from_parts(model, Channels::from_buf([c[0], c[1], c[2], a]))
}

fn copy(color: &Color) -> Color {
    color.clone()
}

fn drop_alpha(color: &Color) -> Color {
    let model = match color.model() {
        Model::Rgba => Model::Rgb,
        Model::Hsla => Model::Hsl,
        other => other,
    };
    opaque(model, triple(color))
}

fn rgb_to_rgba(color: &Color) -> Color {
    translucent(Model::Rgba, triple(color), 1.0)
}

fn rgb_to_hsl_color(color: &Color) -> Color {
    opaque(Model::Hsl, rgb_to_hsl(triple(color)))
}

fn rgb_to_hsla(color: &Color) -> Color {
    translucent(Model::Hsla, rgb_to_hsl(triple(color)), 1.0)
}

fn rgba_to_hsl(color: &Color) -> Color {
    rgb_to_hsl_color(&drop_alpha(color))
}

fn rgba_to_hsla(color: &Color) -> Color {
    translucent(Model::Hsla, rgb_to_hsl(triple(color)), alpha(color))
}

fn hsl_to_rgb_color(color: &Color) -> Color {
    opaque(Model::Rgb, hsl_to_rgb(triple(color)))
}

fn hsl_to_rgba(color: &Color) -> Color {
    translucent(Model::Rgba, hsl_to_rgb(triple(color)), 1.0)
}

fn hsl_to_hsla(color: &Color) -> Color {
    translucent(Model::Hsla, triple(color), 1.0)
}

fn hsla_to_rgb(color: &Color) -> Color {
    hsl_to_rgb_color(&drop_alpha(color))
}

fn hsla_to_rgba(color: &Color) -> Color {
    translucent(Model::Rgba, hsl_to_rgb(triple(color)), alpha(color))
}

// Force-convert helpers

impl Color {
    /// Converts into `space`. See [`convert`].
    ///
    /// # Errors
    ///
    /// [`Error::UnknownSpace`](crate::Error::UnknownSpace) for unregistered spaces.
    #[inline]
    pub fn to_space(&self, space: ColorSpace) -> Result<Color> {
        convert(self, space)
    }

    /// Converts into RGB, dropping alpha.
    #[inline]
    pub fn to_rgb(&self) -> Color {
        convert_model(self, Model::Rgb)
    }

    /// Converts into RGBA, defaulting alpha to 1.
    #[inline]
    pub fn to_rgba(&self) -> Color {
        convert_model(self, Model::Rgba)
    }

    /// Converts into HSL, dropping alpha.
    #[inline]
    pub fn to_hsl(&self) -> Color {
        convert_model(self, Model::Hsl)
    }

    /// Converts into HSLA, defaulting alpha to 1.
    #[inline]
    pub fn to_hsla(&self) -> Color {
        convert_model(self, Model::Hsla)
    }

    /// Converts into the RGB family, keeping alpha-ness.
    pub fn to_any_rgb(&self) -> Color {
        if self.is_alpha() { self.to_rgba() } else { self.to_rgb() }
    }

    /// Converts into the HSL family, keeping alpha-ness.
    pub fn to_any_hsl(&self) -> Color {
        if self.is_alpha() { self.to_hsla() } else { self.to_hsl() }
    }

    /// Converts into an alpha space of the current family: HSLA for HSL
    /// colors, RGBA otherwise.
    pub fn to_any_alpha(&self) -> Color {
        if self.is_any_hsl() { self.to_hsla() } else { self.to_rgba() }
    }

    /// Converts into an opaque space of the current family.
    pub fn to_any_opaque(&self) -> Color {
        if self.is_any_hsl() { self.to_hsl() } else { self.to_rgb() }
    }
}

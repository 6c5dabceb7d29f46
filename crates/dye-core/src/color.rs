//! The immutable color value.
//!
//! A [`Color`] is a tagged tuple: the [`ColorSpace`] it lives in plus the
//! channel data for that space, stored pre-scaled (red in `0..=255`, hue in
//! `0..=360`, saturation/lightness/alpha in `0..=1`).
//!
//! # Invariants
//!
//! - The space is always a registered space (RGB, RGBA, HSL or HSLA).
//! - The data length always equals the channel count of the space.
//!
//! No other invariant is enforced: channel values may be out of range, and
//! nothing in the core clamps them.
//!
//! # Lifecycle
//!
//! Colors are created by the per-space constructors, [`Color::create`], the
//! converter, the channel mutators or the expression codec. They are never
//! mutated afterwards; every operation returns a new value.
//!
//! ```
//! use dye_core::{Color, ColorSpace};
//!
//! let red = Color::rgb(255.0, 0.0, 0.0);
//! assert_eq!(red.space(), ColorSpace::Rgb);
//! assert_eq!(red.data(), &[255.0, 0.0, 0.0]);
//!
//! let translucent = Color::create(ColorSpace::Hsla, &[0.0, 1.0, 0.5, 0.25]).unwrap();
//! assert!(translucent.is_alpha());
//! ```

use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::space::{self, ColorSpace, SpaceMetadata};

/// Inline channel storage; no registered space has more than four channels.
pub(crate) type Channels = SmallVec<[f64; 4]>;

/// Registered spaces, the only ones a [`Color`] can be tagged with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Model {
    Rgb,
    Rgba,
    Hsl,
    Hsla,
}

impl Model {
    pub(crate) const fn space(self) -> ColorSpace {
        match self {
            Self::Rgb => ColorSpace::Rgb,
            Self::Rgba => ColorSpace::Rgba,
            Self::Hsl => ColorSpace::Hsl,
            Self::Hsla => ColorSpace::Hsla,
        }
    }

    pub(crate) fn from_space(space: ColorSpace) -> Result<Self> {
        match space {
            ColorSpace::Rgb => Ok(Self::Rgb),
            ColorSpace::Rgba => Ok(Self::Rgba),
            ColorSpace::Hsl => Ok(Self::Hsl),
            ColorSpace::Hsla => Ok(Self::Hsla),
            other => Err(Error::unknown_space(other.name())),
        }
    }

    pub(crate) fn metadata(self) -> &'static SpaceMetadata {
        match self {
            Self::Rgb => &space::RGB_METADATA,
            Self::Rgba => &space::RGBA_METADATA,
            Self::Hsl => &space::HSL_METADATA,
            Self::Hsla => &space::HSLA_METADATA,
        }
    }

    pub(crate) const fn channel_count(self) -> usize {
        match self {
            Self::Rgb | Self::Hsl => 3,
            Self::Rgba | Self::Hsla => 4,
        }
    }
}

/// An immutable color in one of the registered color spaces.
///
/// Cloning is cheap (channels are stored inline) and colors are
/// `Send + Sync`, so they can be shared freely.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawColor", into = "RawColor")
)]
pub struct Color {
    model: Model,
    data: Channels,
}

impl Color {
    /// Builds a color from a model and channels of the right length.
    #[inline]
    pub(crate) fn from_parts(model: Model, data: Channels) -> Self {
        debug_assert_eq!(data.len(), model.channel_count());
        Self { model, data }
    }

    #[inline]
    pub(crate) fn model(&self) -> Model {
        self.model
    }

    /// Creates a color in any registered space.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownSpace`] if `space` is not registered.
    /// - [`Error::ChannelCountMismatch`] if `data` has the wrong length.
    ///
    /// # Example
    ///
    /// ```
    /// use dye_core::{Color, ColorSpace};
    ///
    /// let c = Color::create(ColorSpace::Hsl, &[120.0, 1.0, 0.5]).unwrap();
    /// assert_eq!(c, Color::hsl(120.0, 1.0, 0.5));
    /// assert!(Color::create(ColorSpace::Cmyk, &[0.0; 4]).is_err());
    /// ```
    pub fn create(space: ColorSpace, data: &[f64]) -> Result<Self> {
        let model = Model::from_space(space)?;
        let expected = model.channel_count();
        if data.len() != expected {
            return Err(Error::channel_count_mismatch(space.name(), expected, data.len()));
        }
        Ok(Self::from_parts(model, Channels::from_slice(data)))
    }

    /// Creates an RGB color (channels in `0..=255`).
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::from_parts(Model::Rgb, SmallVec::from_buf_and_len([r, g, b, 0.0], 3))
    }

    /// Creates an RGBA color (channels in `0..=255`, alpha in `0..=1`).
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::from_parts(Model::Rgba, SmallVec::from_buf([r, g, b, a]))
    }

    /// Creates an HSL color (hue in `0..=360`, saturation and lightness in `0..=1`).
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self::from_parts(Model::Hsl, SmallVec::from_buf_and_len([h, s, l, 0.0], 3))
    }

    /// Creates an HSLA color.
    pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self::from_parts(Model::Hsla, SmallVec::from_buf([h, s, l, a]))
    }

    /// The space this color is tagged with.
    #[inline]
    pub fn space(&self) -> ColorSpace {
        self.model.space()
    }

    /// Channel values in the order declared by the space.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Metadata of this color's space.
    #[inline]
    pub fn metadata(&self) -> &'static SpaceMetadata {
        self.model.metadata()
    }

    /// Whether the color is tagged with `space`.
    #[inline]
    pub fn is_space(&self, space: ColorSpace) -> bool {
        self.space() == space
    }

    /// Whether the color is in RGB.
    #[inline]
    pub fn is_rgb(&self) -> bool {
        self.is_space(ColorSpace::Rgb)
    }

    /// Whether the color is in RGBA.
    #[inline]
    pub fn is_rgba(&self) -> bool {
        self.is_space(ColorSpace::Rgba)
    }

    /// Whether the color is in RGB or RGBA.
    #[inline]
    pub fn is_any_rgb(&self) -> bool {
        self.is_rgb() || self.is_rgba()
    }

    /// Whether the color is in HSL.
    #[inline]
    pub fn is_hsl(&self) -> bool {
        self.is_space(ColorSpace::Hsl)
    }

    /// Whether the color is in HSLA.
    #[inline]
    pub fn is_hsla(&self) -> bool {
        self.is_space(ColorSpace::Hsla)
    }

    /// Whether the color is in HSL or HSLA.
    #[inline]
    pub fn is_any_hsl(&self) -> bool {
        self.is_hsl() || self.is_hsla()
    }

    /// Whether the color carries an opacity channel.
    #[inline]
    pub fn is_alpha(&self) -> bool {
        self.space().has_alpha()
    }
}

/// Serialized shape of a [`Color`]: `{ "space": "rgb", "data": [..] }`.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawColor {
    space: ColorSpace,
    data: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawColor> for Color {
    type Error = Error;

    fn try_from(raw: RawColor) -> Result<Self> {
        Self::create(raw.space, &raw.data)
    }
}

#[cfg(feature = "serde")]
impl From<Color> for RawColor {
    fn from(color: Color) -> Self {
        Self {
            space: color.space(),
            data: color.data.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_tag_space() {
        assert_eq!(Color::rgb(1.0, 2.0, 3.0).space(), ColorSpace::Rgb);
        assert_eq!(Color::rgba(1.0, 2.0, 3.0, 0.5).space(), ColorSpace::Rgba);
        assert_eq!(Color::hsl(1.0, 0.2, 0.3).space(), ColorSpace::Hsl);
        assert_eq!(Color::hsla(1.0, 0.2, 0.3, 0.4).space(), ColorSpace::Hsla);
        assert_eq!(Color::hsla(1.0, 0.2, 0.3, 0.4).data(), &[1.0, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_create_validates_channel_count() {
        let err = Color::create(ColorSpace::Rgba, &[0.0, 0.0, 0.0]).unwrap_err();
        assert_eq!(err, Error::channel_count_mismatch("rgba", 4, 3));
    }

    #[test]
    fn test_create_rejects_unregistered_space() {
        let err = Color::create(ColorSpace::Xyz, &[0.0, 0.0, 0.0]).unwrap_err();
        assert_eq!(err, Error::unknown_space("xyz"));
    }

    #[test]
    fn test_out_of_range_values_are_kept() {
        let c = Color::create(ColorSpace::Rgb, &[-10.0, 300.0, 1e6]).unwrap();
        assert_eq!(c.data(), &[-10.0, 300.0, 1e6]);
    }

    #[test]
    fn test_predicates() {
        let hsl = Color::hsl(0.0, 0.0, 0.0);
        assert!(hsl.is_hsl());
        assert!(hsl.is_any_hsl());
        assert!(!hsl.is_rgb());
        assert!(!hsl.is_alpha());

        let rgba = Color::rgba(0.0, 0.0, 0.0, 1.0);
        assert!(rgba.is_any_rgb());
        assert!(rgba.is_alpha());
        assert!(!rgba.is_any_hsl());
    }

    #[test]
    fn test_metadata_matches_data_len() {
        for space in ColorSpace::REGISTERED {
            let n = space::channel_count(space).unwrap();
            let c = Color::create(space, &vec![0.0; n]).unwrap();
            assert_eq!(c.metadata().channel_count(), c.data().len());
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape() {
        let c = Color::hsla(180.0, 0.5, 0.25, 1.0);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"space":"hsla","data":[180.0,0.5,0.25,1.0]}"#);
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<Color>(r#"{"space":"rgb","data":[1.0]}"#).is_err());
    }
}

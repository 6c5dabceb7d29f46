//! Color space definitions and the static space registry.
//!
//! This module provides the [`ColorSpace`] tag carried by every
//! [`Color`](crate::Color) and the per-space channel metadata used by the
//! converter and the expression codec.
//!
//! # Design
//!
//! Each registered space owns an ordered list of [`ChannelSpec`]s. A channel's
//! `scale` maps the normalized `[0, 1]` domain onto the human-facing range that
//! colors are stored in (255 for 8-bit channels, 360 for hue degrees, 1 for
//! saturation, lightness and alpha).
//!
//! # Supported Color Spaces
//!
//! | Space  | Channels                 | Scales            |
//! |--------|--------------------------|-------------------|
//! | `rgb`  | red, green, blue         | 255, 255, 255     |
//! | `rgba` | red, green, blue, alpha  | 255, 255, 255, 1  |
//! | `hsl`  | hue, saturation, lightness | 360, 1, 1       |
//! | `hsla` | hue, saturation, lightness, alpha | 360, 1, 1, 1 |
//!
//! `hsv`, `hsva`, `cmyk`, `xyz` and `lab` are declared so they can be named,
//! but they have no metadata: every registry lookup for them fails with
//! [`Error::UnknownSpace`].
//!
//! # Usage
//!
//! ```
//! use dye_core::{ColorSpace, space};
//!
//! assert_eq!(space::channel_count(ColorSpace::Hsla).unwrap(), 4);
//! assert_eq!(space::scales(ColorSpace::Hsl).unwrap(), vec![360.0, 1.0, 1.0]);
//! assert!(space::metadata(ColorSpace::Lab).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Color spaces known to the library.
///
/// Only the spaces listed in [`ColorSpace::REGISTERED`] have metadata and
/// converters. The remaining variants are placeholders for future spaces and
/// fail explicitly wherever they are used.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ColorSpace {
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue, alpha.
    Rgba,
    /// Hue, saturation, lightness.
    Hsl,
    /// Hue, saturation, lightness, alpha.
    Hsla,
    /// Hue, saturation, value (not implemented).
    Hsv,
    /// Hue, saturation, value, alpha (not implemented).
    Hsva,
    /// Cyan, magenta, yellow, key (not implemented).
    Cmyk,
    /// CIE XYZ (not implemented).
    Xyz,
    /// CIE L*a*b* (not implemented).
    Lab,
}

impl ColorSpace {
    /// Every declared space, registered or not.
    pub const ALL: [ColorSpace; 9] = [
        Self::Rgb,
        Self::Rgba,
        Self::Hsl,
        Self::Hsla,
        Self::Hsv,
        Self::Hsva,
        Self::Cmyk,
        Self::Xyz,
        Self::Lab,
    ];

    /// Spaces with metadata and converters.
    pub const REGISTERED: [ColorSpace; 4] = [Self::Rgb, Self::Rgba, Self::Hsl, Self::Hsla];

    /// Lowercase name, as used in functional expressions.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
            Self::Hsv => "hsv",
            Self::Hsva => "hsva",
            Self::Cmyk => "cmyk",
            Self::Xyz => "xyz",
            Self::Lab => "lab",
        }
    }

    /// Whether this space has registered metadata.
    #[inline]
    pub fn is_registered(self) -> bool {
        metadata(self).is_ok()
    }

    /// Whether this space carries an opacity channel.
    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba | Self::Hsla | Self::Hsva)
    }

    /// Returns the metadata of this space.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownSpace`] if the space is not registered.
    #[inline]
    pub fn metadata(self) -> Result<&'static SpaceMetadata> {
        metadata(self)
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = Error;

    /// Parses a lowercase space name. Matching is exact.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|space| space.name() == s)
            .ok_or_else(|| Error::unknown_space(s))
    }
}

/// Numeric type channel values are cast to when parsed or printed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ValueType {
    /// Rounded to the nearest integer.
    Int,
    /// Kept as a float.
    Float,
}

/// Unit a channel is written with in functional expressions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ColorUnit {
    /// Plain number.
    #[default]
    Fixed,
    /// Percentage of the channel scale (`%`).
    Percent,
}

impl ColorUnit {
    /// Suffix written after the number.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Fixed => "",
            Self::Percent => "%",
        }
    }
}

/// Metadata of a single channel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChannelSpec {
    /// Human-readable channel name.
    pub name: &'static str,
    /// Multiplier from the normalized `[0, 1]` domain to the stored range.
    pub scale: f64,
    /// Numeric type of the channel.
    pub value_type: ValueType,
    /// Unit used in functional expressions.
    pub unit: ColorUnit,
}

impl ChannelSpec {
    const fn new(name: &'static str, scale: f64, value_type: ValueType, unit: ColorUnit) -> Self {
        Self {
            name,
            scale,
            value_type,
            unit,
        }
    }
}

/// Ordered channel metadata of a color space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpaceMetadata {
    /// The space this metadata describes.
    pub space: ColorSpace,
    /// Channels in storage and expression order.
    pub channels: &'static [ChannelSpec],
}

impl SpaceMetadata {
    /// Number of channels.
    #[inline]
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Channel scales in order.
    pub fn scales(&self) -> Vec<f64> {
        self.channels.iter().map(|c| c.scale).collect()
    }

    /// Channel units in order.
    pub fn units(&self) -> Vec<ColorUnit> {
        self.channels.iter().map(|c| c.unit).collect()
    }

    /// Channel value types in order.
    pub fn value_types(&self) -> Vec<ValueType> {
        self.channels.iter().map(|c| c.value_type).collect()
    }
}

const RED: ChannelSpec = ChannelSpec::new("red", 255.0, ValueType::Int, ColorUnit::Fixed);
const GREEN: ChannelSpec = ChannelSpec::new("green", 255.0, ValueType::Int, ColorUnit::Fixed);
const BLUE: ChannelSpec = ChannelSpec::new("blue", 255.0, ValueType::Int, ColorUnit::Fixed);
const HUE: ChannelSpec = ChannelSpec::new("hue", 360.0, ValueType::Float, ColorUnit::Fixed);
const SATURATION: ChannelSpec =
    ChannelSpec::new("saturation", 1.0, ValueType::Float, ColorUnit::Percent);
const LIGHTNESS: ChannelSpec =
    ChannelSpec::new("lightness", 1.0, ValueType::Float, ColorUnit::Percent);
const ALPHA: ChannelSpec = ChannelSpec::new("alpha", 1.0, ValueType::Float, ColorUnit::Fixed);

pub(crate) static RGB_METADATA: SpaceMetadata = SpaceMetadata {
    space: ColorSpace::Rgb,
    channels: &[RED, GREEN, BLUE],
};

pub(crate) static RGBA_METADATA: SpaceMetadata = SpaceMetadata {
    space: ColorSpace::Rgba,
    channels: &[RED, GREEN, BLUE, ALPHA],
};

pub(crate) static HSL_METADATA: SpaceMetadata = SpaceMetadata {
    space: ColorSpace::Hsl,
    channels: &[HUE, SATURATION, LIGHTNESS],
};

pub(crate) static HSLA_METADATA: SpaceMetadata = SpaceMetadata {
    space: ColorSpace::Hsla,
    channels: &[HUE, SATURATION, LIGHTNESS, ALPHA],
};

/// Returns all metadata of the given color space.
///
/// # Errors
///
/// [`Error::UnknownSpace`] for spaces that are declared but not registered.
pub fn metadata(space: ColorSpace) -> Result<&'static SpaceMetadata> {
    match space {
        ColorSpace::Rgb => Ok(&RGB_METADATA),
        ColorSpace::Rgba => Ok(&RGBA_METADATA),
        ColorSpace::Hsl => Ok(&HSL_METADATA),
        ColorSpace::Hsla => Ok(&HSLA_METADATA),
        ColorSpace::Hsv
        | ColorSpace::Hsva
        | ColorSpace::Cmyk
        | ColorSpace::Xyz
        | ColorSpace::Lab => Err(Error::unknown_space(space.name())),
    }
}

/// Returns the number of channels of a color space.
///
/// # Errors
///
/// [`Error::UnknownSpace`] for unregistered spaces.
pub fn channel_count(space: ColorSpace) -> Result<usize> {
    Ok(metadata(space)?.channel_count())
}

/// Returns the channel scales of a color space.
///
/// # Errors
///
/// [`Error::UnknownSpace`] for unregistered spaces.
pub fn scales(space: ColorSpace) -> Result<Vec<f64>> {
    Ok(metadata(space)?.scales())
}

/// Returns the channel units of a color space.
///
/// # Errors
///
/// [`Error::UnknownSpace`] for unregistered spaces.
pub fn units(space: ColorSpace) -> Result<Vec<ColorUnit>> {
    Ok(metadata(space)?.units())
}

/// Returns the channel value types of a color space.
///
/// # Errors
///
/// [`Error::UnknownSpace`] for unregistered spaces.
pub fn value_types(space: ColorSpace) -> Result<Vec<ValueType>> {
    Ok(metadata(space)?.value_types())
}

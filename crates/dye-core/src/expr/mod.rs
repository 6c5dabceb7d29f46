//! Textual color expressions.
//!
//! Two notations are supported:
//!
//! | Notation   | Example                   | Parse               | Serialize          |
//! |------------|---------------------------|---------------------|--------------------|
//! | Hex        | `#0af`, `#00aaff`         | [`parse_hex`]       | [`to_hex`]         |
//! | Functional | `hsla(200,50%,40%,0.5)`   | [`parse_function`]  | [`to_function`]    |
//!
//! [`to_css_string`] (also used by `Display`) picks the shortest faithful
//! form: hex for opaque colors, functional RGBA when opacity is below 1.
//!
//! Named colors are not handled here; they live in the `dye-names` crate and
//! the `dye` facade consults them before falling back to these parsers.
//!
//! # Usage
//!
//! ```
//! use dye_core::Color;
//!
//! let c: Color = "rgba(0%, 50%, 100%, .5)".parse().unwrap();
//! assert_eq!(c.to_string(), "rgba(0,128,255,0.5)");
//!
//! let c: Color = "hsl(180, .5, .5)".parse().unwrap();
//! assert_eq!(c.to_string(), "#40bfbf");
//! ```

mod function;
mod hex;

use std::fmt;
use std::str::FromStr;

pub use function::{format_float, parse_function, to_function};
pub use hex::{parse_hex, to_hex};

use crate::color::Color;
use crate::error::{Error, Result};

/// Serializes a color for CSS-style output.
///
/// The color is converted to RGB (or RGBA if it carries alpha). Alpha colors
/// with opacity below 1 are written in functional form, everything else as hex.
pub fn to_css_string(color: &Color) -> String {
    let rgb = color.to_any_rgb();
    if rgb.is_alpha() && rgb.opacity() < 1.0 {
        to_function(&rgb)
    } else {
        to_hex(&rgb)
    }
}

/// Parses hex when the text starts with `#`, functional notation otherwise.
///
/// # Errors
///
/// Any error of [`parse_hex`] or [`parse_function`].
pub fn parse(value: &str) -> Result<Color> {
    if value.starts_with('#') {
        parse_hex(value)
    } else {
        parse_function(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_css_string(self))
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

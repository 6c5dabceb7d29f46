//! # dye-core
//!
//! Core types for the dye color library.
//!
//! This crate provides everything needed to represent, convert and print a
//! single color value:
//!
//! - [`ColorSpace`] and the [`space`] registry - per-space channel metadata
//! - [`Color`] - an immutable color tagged with its space
//! - [`convert()`] and the `to_*` helpers - conversion between RGB, RGBA, HSL and HSLA
//! - Channel getters, withers and adjustments (`hue`, `with_opacity`, `lighten`, ...)
//! - [`expr`] - hex and functional expression parsing and serialization
//!
//! ## Quick Start
//!
//! ```rust
//! use dye_core::prelude::*;
//!
//! let base: Color = "hsl(200, 60%, 40%)".parse()?;
//! let accent = base.complement_default().lighten(0.2);
//!
//! assert_eq!(accent.space(), ColorSpace::Hsl);
//! println!("{base} -> {accent}");
//! # Ok::<(), dye_core::Error>(())
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! dye-core (this crate)
//!    ^
//!    |
//!    +-- dye-names (named color table)
//!    +-- dye-ops (mixing, schemes)
//!    +-- dye (facade, parse_color, dye! macro)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/Deserialize for [`Color`], [`ColorSpace`], [`ColorUnit`] and [`ValueType`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod color;
pub mod convert;
pub mod error;
pub mod expr;
pub mod math;
pub mod space;

pub use channel::DEFAULT_COMPLEMENT_OFFSET;
pub use color::Color;
pub use convert::convert;
pub use error::{Error, Result};
pub use space::{ChannelSpec, ColorSpace, ColorUnit, SpaceMetadata, ValueType};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use dye_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Color;
    pub use crate::convert::convert;
    pub use crate::error::{Error, Result};
    pub use crate::expr::{parse_function, parse_hex, to_css_string, to_function, to_hex};
    pub use crate::math::rotate_value;
    pub use crate::space::{ColorSpace, ColorUnit, ValueType};
}

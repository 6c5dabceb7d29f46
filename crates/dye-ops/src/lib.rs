//! # dye-ops
//!
//! Color derivation for the dye color library.
//!
//! This crate builds new colors out of existing ones:
//!
//! - [`mix`](mod@mix) - combine two colors under a [`MixMode`]
//! - [`scheme`] - lazy generated sequences and keyed schemes (shades,
//!   complementary, analogous, triadic, ...)
//!
//! # Example
//!
//! ```rust
//! use dye_core::Color;
//! use dye_ops::{mix, MixMode, SchemeKind, SchemeOptions};
//!
//! let base = Color::hsl(30.0, 0.8, 0.5);
//! let muted = mix(&base, &Color::rgb(128.0, 128.0, 128.0), MixMode::Average);
//! assert!(muted.is_rgb());
//!
//! let triad = SchemeKind::Triadic.build(&base, SchemeOptions::default());
//! assert_eq!(triad.len(), 3);
//! ```
//!
//! # Dependencies
//!
//! - `dye-core` - color values, conversion and channel adjustments
//! - [`tracing`] - debug events for scheme construction and mixing

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod mix;
pub mod scheme;

pub use error::{OpsError, OpsResult};
pub use mix::{mix, mix_named, MixMode};
pub use scheme::{
    create_scheme, generate_scheme, Scheme, SchemeGeneration, SchemeIter, SchemeKind,
    SchemeOptions,
};

//! # dye-names
//!
//! Named colors for the dye color library.
//!
//! The built-in table maps camelCase names such as `cornflowerBlue` to opaque
//! RGB colors. It lives outside `dye-core` so that consumers who never parse
//! names do not pay for building the table: the map is constructed lazily,
//! on the first lookup.
//!
//! # Usage
//!
//! ```
//! use dye_core::Color;
//!
//! assert_eq!(dye_names::lookup("black"), Some(Color::rgb(0.0, 0.0, 0.0)));
//! assert!(dye_names::lookup("notAColor").is_none());
//! assert!(dye_names::len() >= dye_names::NAMED_COLORS.len());
//! ```
//!
//! # Dependencies
//!
//! - `dye-core` - the [`Color`](dye_core::Color) type
//! - [`regex`] - name search in [`find`]
//!
//! # Used By
//!
//! - `dye` - `parse_color` consults the registry before hex and functional parsing
//! - `dye-cli` - `names` command and config palettes

#![warn(missing_docs)]

pub mod error;
pub mod registry;
mod table;

pub use error::{NamesError, NamesResult};
pub use registry::NameRegistry;
pub use table::NAMED_COLORS;

use dye_core::Color;

/// Looks up `name` in the global registry.
pub fn lookup(name: &str) -> Option<Color> {
    NameRegistry::global().lookup(name)
}

/// Registers `color` under `name` in the global registry.
///
/// # Errors
///
/// See [`NameRegistry::register`].
pub fn register(name: impl Into<String>, color: Color) -> NamesResult<Option<Color>> {
    NameRegistry::global().register(name, color)
}

/// All names in the global registry, sorted.
pub fn names() -> Vec<String> {
    NameRegistry::global().names()
}

/// Number of names in the global registry.
pub fn len() -> usize {
    NameRegistry::global().len()
}

/// Entries of the global registry whose name matches `pattern`.
///
/// # Errors
///
/// See [`NameRegistry::find`].
pub fn find(pattern: &str) -> NamesResult<Vec<(String, Color)>> {
    NameRegistry::global().find(pattern)
}

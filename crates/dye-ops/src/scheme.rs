//! Color schemes: sequences of colors derived from a base color.
//!
//! A scheme is produced by a generator `(color, value) -> color` evaluated at
//! `start`, `start + step`, `start + 2 * step`, ... The sequence is lazy and
//! finite; [`generate_scheme`] returns a fresh iterator on every call, and
//! cloning a [`SchemeIter`] restarts from the clone's position.
//!
//! Named schemes attach fixed keys to the generated colors:
//!
//! | Scheme                          | Keys                                         | Values            |
//! |---------------------------------|----------------------------------------------|-------------------|
//! | [`light_shade_scheme`]          | normal, light, lighter, lightest             | lighten by 0, 0.1, 0.2, 0.3 |
//! | [`dark_shade_scheme`]           | normal, dark, darker, darkest                | darken by 0, 0.1, 0.2, 0.3  |
//! | [`shade_scheme`]                | light keys followed by dark keys             |                   |
//! | [`complementary_scheme`]        | primary, secondary                           | hue +0, +180      |
//! | [`analogous_scheme`]            | tertiary, primary, secondary                 | hue -30, 0, +30   |
//! | [`split_complementary_scheme`]  | tertiary, primary, secondary                 | hue -150, 0, +150 |
//! | [`triadic_scheme`]              | tertiary, primary, secondary                 | hue -120, 0, +120 |
//! | [`square_scheme`]               | primary, secondary, tertiary, quartenary     | hue +0, +90, +180, +270 |
//! | [`tetradic_scheme`]             | primary, secondary, tertiary, quartenary     | hue +0, +120, +180, -60 |
//!
//! # Example
//!
//! ```rust
//! use dye_core::Color;
//! use dye_ops::scheme::{generate_scheme, light_shade_scheme, SchemeGeneration, SchemeOptions};
//!
//! let base = Color::hsl(200.0, 0.5, 0.4);
//!
//! let shades = light_shade_scheme(&base, SchemeOptions::default());
//! assert_eq!(shades.keys().collect::<Vec<_>>(), ["normal", "light", "lighter", "lightest"]);
//! assert_eq!(shades.get("normal"), Some(&base));
//!
//! let ramp: Vec<Color> = generate_scheme(&base, Color::darken, SchemeGeneration::default()).collect();
//! assert_eq!(ramp.len(), 5);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use dye_core::Color;
use tracing::debug;

use crate::{OpsError, OpsResult};

/// Start and step of a keyed scheme; the length comes from the keys.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemeOptions {
    /// Generator value for the first color.
    pub start: f64,
    /// Increment between consecutive colors.
    pub step: f64,
}

impl SchemeOptions {
    /// Creates options with the given start and step.
    pub const fn new(start: f64, step: f64) -> Self {
        Self { start, step }
    }

    /// Extends these options with a sequence length.
    pub const fn with_length(self, length: usize) -> SchemeGeneration {
        SchemeGeneration {
            start: self.start,
            step: self.step,
            length,
        }
    }
}

impl Default for SchemeOptions {
    /// `start = 0`, `step = 0.1`.
    fn default() -> Self {
        Self::new(0.0, 0.1)
    }
}

/// Full parameters of a generated sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemeGeneration {
    /// Generator value for the first color.
    pub start: f64,
    /// Increment between consecutive colors.
    pub step: f64,
    /// Number of colors produced.
    pub length: usize,
}

impl Default for SchemeGeneration {
    /// `start = 0`, `step = 0.1`, `length = 5`.
    fn default() -> Self {
        SchemeOptions::default().with_length(5)
    }
}

/// Lazy sequence of generated colors. See [`generate_scheme`].
#[derive(Clone)]
pub struct SchemeIter<G> {
    color: Color,
    generate: G,
    options: SchemeGeneration,
    index: usize,
}

impl<G> fmt::Debug for SchemeIter<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeIter")
            .field("color", &self.color)
            .field("options", &self.options)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<G> Iterator for SchemeIter<G>
where
    G: Fn(&Color, f64) -> Color,
{
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        if self.index >= self.options.length {
            return None;
        }
        let value = self.options.start + self.index as f64 * self.options.step;
        self.index += 1;
        Some((self.generate)(&self.color, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.options.length.saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<G> ExactSizeIterator for SchemeIter<G> where G: Fn(&Color, f64) -> Color {}

impl<G> FusedIterator for SchemeIter<G> where G: Fn(&Color, f64) -> Color {}

/// Generates `options.length` colors at `generate(color, start + i * step)`.
///
/// Nothing is computed until the iterator is advanced; dropping it early is
/// fine.
pub fn generate_scheme<G>(color: &Color, generate: G, options: SchemeGeneration) -> SchemeIter<G>
where
    G: Fn(&Color, f64) -> Color,
{
    SchemeIter {
        color: color.clone(),
        generate,
        options,
        index: 0,
    }
}

/// An ordered, keyed set of colors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scheme {
    entries: Vec<(String, Color)>,
}

impl Scheme {
    /// Creates an empty scheme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Color stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Color> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, c)| c)
    }

    /// Inserts or replaces `key`. Replacing keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, color: Color) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = color,
            None => self.entries.push((key, color)),
        }
    }

    /// Merges `other` into `self`; keys in both take the color from `other`.
    pub fn merge(mut self, other: Scheme) -> Scheme {
        for (key, color) in other.entries {
            self.insert(key, color);
        }
        self
    }

    /// Keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Colors in order.
    pub fn colors(&self) -> impl Iterator<Item = &Color> {
        self.entries.iter().map(|(_, c)| c)
    }

    /// `(key, color)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Color)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), c))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scheme has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Scheme {
    type Item = (String, Color);
    type IntoIter = std::vec::IntoIter<(String, Color)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Builds a keyed scheme with one generated color per key.
pub fn create_scheme<G>(color: &Color, keys: &[&str], generate: G, options: SchemeOptions) -> Scheme
where
    G: Fn(&Color, f64) -> Color,
{
    debug!(keys = keys.len(), start = options.start, step = options.step, "create scheme");
    let mut scheme = Scheme::new();
    for (key, generated) in keys.iter().zip(generate_scheme(color, generate, options.with_length(keys.len()))) {
        scheme.insert(*key, generated);
    }
    scheme
}

/// `normal, light, lighter, lightest` by increasing lightness.
pub fn light_shade_scheme(color: &Color, options: SchemeOptions) -> Scheme {
    create_scheme(color, &["normal", "light", "lighter", "lightest"], Color::lighten, options)
}

/// `normal, dark, darker, darkest` by decreasing lightness.
pub fn dark_shade_scheme(color: &Color, options: SchemeOptions) -> Scheme {
    create_scheme(color, &["normal", "dark", "darker", "darkest"], Color::darken, options)
}

/// Light shades followed by dark shades, sharing `normal`.
pub fn shade_scheme(color: &Color, options: SchemeOptions) -> Scheme {
    light_shade_scheme(color, options).merge(dark_shade_scheme(color, options))
}

/// The color and its opposite hue.
pub fn complementary_scheme(color: &Color) -> Scheme {
    create_scheme(color, &["primary", "secondary"], Color::complement, SchemeOptions::new(0.0, 180.0))
}

/// Neighbours at -30 and +30 degrees.
pub fn analogous_scheme(color: &Color) -> Scheme {
    create_scheme(
        color,
        &["tertiary", "primary", "secondary"],
        Color::complement,
        SchemeOptions::new(-30.0, 30.0),
    )
}

/// Neighbours of the complement, at -150 and +150 degrees.
pub fn split_complementary_scheme(color: &Color) -> Scheme {
    create_scheme(
        color,
        &["tertiary", "primary", "secondary"],
        Color::complement,
        SchemeOptions::new(-150.0, 150.0),
    )
}

/// Three hues 120 degrees apart.
pub fn triadic_scheme(color: &Color) -> Scheme {
    create_scheme(
        color,
        &["tertiary", "primary", "secondary"],
        Color::complement,
        SchemeOptions::new(-120.0, 120.0),
    )
}

/// Four hues 90 degrees apart.
pub fn square_scheme(color: &Color) -> Scheme {
    create_scheme(
        color,
        &["primary", "secondary", "tertiary", "quartenary"],
        Color::complement,
        SchemeOptions::new(0.0, 90.0),
    )
}

/// Two complementary pairs: hue offsets 0, 120, 180 and -60.
pub fn tetradic_scheme(color: &Color) -> Scheme {
    let mut scheme = Scheme::new();
    scheme.insert("primary", color.clone());
    scheme.insert("secondary", color.complement(120.0));
    scheme.insert("tertiary", color.complement(180.0));
    scheme.insert("quartenary", color.complement(-60.0));
    scheme
}

/// The named schemes, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    /// [`light_shade_scheme`]
    Light,
    /// [`dark_shade_scheme`]
    Dark,
    /// [`shade_scheme`]
    Shade,
    /// [`complementary_scheme`]
    Complementary,
    /// [`analogous_scheme`]
    Analogous,
    /// [`split_complementary_scheme`]
    Split,
    /// [`triadic_scheme`]
    Triadic,
    /// [`square_scheme`]
    Square,
    /// [`tetradic_scheme`]
    Tetradic,
}

impl SchemeKind {
    /// All kinds.
    pub const ALL: [SchemeKind; 9] = [
        Self::Light,
        Self::Dark,
        Self::Shade,
        Self::Complementary,
        Self::Analogous,
        Self::Split,
        Self::Triadic,
        Self::Square,
        Self::Tetradic,
    ];

    /// Lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Shade => "shade",
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Split => "split",
            Self::Triadic => "triadic",
            Self::Square => "square",
            Self::Tetradic => "tetradic",
        }
    }

    /// Builds the scheme. `options` only affects the shade kinds; hue
    /// schemes use fixed offsets.
    pub fn build(self, color: &Color, options: SchemeOptions) -> Scheme {
        match self {
            Self::Light => light_shade_scheme(color, options),
            Self::Dark => dark_shade_scheme(color, options),
            Self::Shade => shade_scheme(color, options),
            Self::Complementary => complementary_scheme(color),
            Self::Analogous => analogous_scheme(color),
            Self::Split => split_complementary_scheme(color),
            Self::Triadic => triadic_scheme(color),
            Self::Square => square_scheme(color),
            Self::Tetradic => tetradic_scheme(color),
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemeKind {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| OpsError::UnknownSchemeKind { kind: s.to_string() })
    }
}

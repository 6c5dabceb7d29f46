//! CLI command implementations

pub mod adjust;
pub mod convert;
pub mod mix;
pub mod names;
pub mod scheme;
pub mod show;

use anyhow::{Context, Result};
use dye::{expr, Color, ColorSpace};
use serde::Serialize;

/// Parse a color expression argument
pub fn parse(value: &str) -> Result<Color> {
    dye::parse_color(value).with_context(|| format!("Invalid color: {value}"))
}

/// JSON view of a single color.
#[derive(Debug, Serialize)]
pub struct ColorReport {
    /// CSS string (hex, or rgba when translucent).
    pub css: String,
    /// Functional form in the color's own space.
    pub function: String,
    /// Space name.
    pub space: ColorSpace,
    /// Raw channel values.
    pub data: Vec<f64>,
}

impl ColorReport {
    pub fn new(color: &Color) -> Self {
        Self {
            css: color.to_string(),
            function: expr::to_function(color),
            space: color.space(),
            data: color.data().to_vec(),
        }
    }
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}

/// Print `name  css  function` for one color
pub fn print_line(label: &str, color: &Color) {
    println!("{label:<12} {:<24} {}", color.to_string(), expr::to_function(color));
}

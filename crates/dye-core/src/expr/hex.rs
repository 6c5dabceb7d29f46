//! Hex notation: `#rgb` and `#rrggbb`.

use crate::color::Color;
use crate::error::{Error, Result};

/// Parses `#rgb` or `#rrggbb` into an opaque RGB color.
///
/// The 3-digit form doubles each digit. Digits are case-insensitive.
///
/// # Errors
///
/// [`Error::InvalidHexExpression`] when the input does not start with `#`,
/// has a length other than 4 or 7, or contains non-hex digits.
///
/// # Example
///
/// ```
/// use dye_core::{expr, Color};
///
/// assert_eq!(expr::parse_hex("#0f8").unwrap(), Color::rgb(0.0, 255.0, 136.0));
/// assert_eq!(expr::parse_hex("#FfFfFf").unwrap(), Color::rgb(255.0, 255.0, 255.0));
/// assert!(expr::parse_hex("#12").is_err());
/// ```
pub fn parse_hex(value: &str) -> Result<Color> {
    let digits = value
        .strip_prefix('#')
        .filter(|d| d.len() == 3 || d.len() == 6)
        .ok_or_else(|| Error::invalid_hex(value))?;
    let nibbles: Vec<u32> = digits
        .chars()
        .map(|c| c.to_digit(16))
        .collect::<Option<_>>()
        .ok_or_else(|| Error::invalid_hex(value))?;

    let channel = |i: usize| -> f64 {
        let v = if nibbles.len() == 3 {
            nibbles[i] * 17
        } else {
            nibbles[2 * i] * 16 + nibbles[2 * i + 1]
        };
        f64::from(v)
    };

    Ok(Color::rgb(channel(0), channel(1), channel(2)))
}

/// Serializes a color as lowercase hex, dropping alpha.
///
/// Channels are rounded and clamped into `0..=255`. The result collapses to
/// the 3-digit form when every pair is a doubled digit.
///
/// # Example
///
/// ```
/// use dye_core::{expr, Color};
///
/// assert_eq!(expr::to_hex(&Color::rgb(0.0, 0.0, 0.0)), "#000");
/// assert_eq!(expr::to_hex(&Color::rgb(18.0, 52.0, 86.0)), "#123456");
/// assert_eq!(expr::to_hex(&Color::hsl(180.0, 0.5, 0.5)), "#40bfbf");
/// ```
pub fn to_hex(color: &Color) -> String {
    let rgb = color.to_rgb();
    let hex: String = rgb
        .data()
        .iter()
        .map(|v| format!("{:02x}", v.round().clamp(0.0, 255.0) as u8))
        .collect();

    let b = hex.as_bytes();
    if b[0] == b[1] && b[2] == b[3] && b[4] == b[5] {
        format!("#{}{}{}", b[0] as char, b[2] as char, b[4] as char)
    } else {
        format!("#{hex}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        let black = Color::rgb(0.0, 0.0, 0.0);
        let white = Color::rgb(255.0, 255.0, 255.0);
        assert_eq!(parse_hex("#000").unwrap(), black);
        assert_eq!(parse_hex("#000000").unwrap(), black);
        assert_eq!(parse_hex("#fff").unwrap(), white);
        assert_eq!(parse_hex("#FfFfFf").unwrap(), white);
        assert_eq!(parse_hex("#123456").unwrap(), Color::rgb(18.0, 52.0, 86.0));
    }

    #[test]
    fn test_parse_is_always_opaque_rgb() {
        assert!(parse_hex("#abc").unwrap().is_rgb());
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for bad in ["#12", "#1234", "#12345", "#1234567", "123", "123456", "", "#", "#ggg", "#12345z", "#ÿÿ"] {
            assert_eq!(parse_hex(bad).unwrap_err(), Error::invalid_hex(bad), "input {bad:?}");
        }
    }

    #[test]
    fn test_to_hex_collapse() {
        assert_eq!(to_hex(&Color::rgb(0.0, 0.0, 0.0)), "#000");
        assert_eq!(to_hex(&Color::rgb(255.0, 255.0, 255.0)), "#fff");
        assert_eq!(to_hex(&Color::rgb(17.0, 34.0, 51.0)), "#123");
        assert_eq!(to_hex(&Color::rgb(18.0, 52.0, 86.0)), "#123456");
        assert_eq!(to_hex(&Color::rgb(17.0, 34.0, 52.0)), "#112234");
    }

    #[test]
    fn test_to_hex_rounds_clamps_and_drops_alpha() {
        assert_eq!(to_hex(&Color::rgb(0.4, 127.5, 254.6)), "#0080ff");
        assert_eq!(to_hex(&Color::rgb(-20.0, 300.0, 0.0)), "#0f0");
        assert_eq!(to_hex(&Color::rgba(255.0, 0.0, 0.0, 0.1)), "#f00");
    }

    #[test]
    fn test_round_trip_channel_sweep() {
        for v in 0..=255u8 {
            let c = Color::rgb(f64::from(v), f64::from(255 - v), f64::from(v / 2));
            assert_eq!(parse_hex(&to_hex(&c)).unwrap(), c);
        }
    }
}

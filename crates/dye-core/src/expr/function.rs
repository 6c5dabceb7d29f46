//! Functional notation: `rgb(r,g,b)`, `rgba(r,g,b,a)`, `hsl(h,s%,l%)`,
//! `hsla(h,s%,l%,a)`.
//!
//! Arguments follow the channel order of the named space. Each argument is a
//! number with an optional unit suffix. Only `%` changes the value: a
//! percentage is taken of the channel's scale (`50%` hue is 180, `25%`
//! lightness is 0.25). Any other unit (`120deg`) reads as the plain number.
//! Integer channels are rounded after the unit is applied.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::space::{self, ChannelSpec, ColorSpace, ColorUnit, ValueType};

/// `name(args)`, surrounding whitespace allowed.
static FUNCTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\w+)\(([^)]+)\)\s*$").expect("Invalid color function regex")
});

/// `<number><unit>?` where unit is letters or `%`
static ARGUMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?(?:\d+\.?\d*|\.\d+))([A-Za-z]+|%)?$")
        .expect("Invalid color argument regex")
});

/// Parses a functional expression such as `hsl(120, 50%, 25%)`.
///
/// # Errors
///
/// - [`Error::InvalidFunctionExpression`] if the text is not `name(args)`.
/// - [`Error::UnknownSpace`] if `name` is not a registered space.
/// - [`Error::ArgumentCountMismatch`] if the argument count is wrong.
/// - [`Error::InvalidArgumentFormat`] if an argument is not `<number><unit>?`.
///
/// # Example
///
/// ```
/// use dye_core::{expr, Color};
///
/// let c = expr::parse_function("rgb(25%, 127 ,75%)").unwrap();
/// assert_eq!(c, Color::rgb(64.0, 127.0, 191.0));
///
/// let c = expr::parse_function("hsla(50%, 0.1, 25%, .4)").unwrap();
/// assert_eq!(c, Color::hsla(180.0, 0.1, 0.25, 0.4));
/// ```
pub fn parse_function(value: &str) -> Result<Color> {
    let caps = FUNCTION_REGEX
        .captures(value)
        .ok_or_else(|| Error::invalid_function(value))?;
    let (name, args) = (&caps[1], &caps[2]);

    let space: ColorSpace = name.parse()?;
    let metadata = space::metadata(space)?;

    let args: Vec<&str> = args.split(',').map(str::trim).collect();
    if args.len() != metadata.channel_count() {
        return Err(Error::argument_count_mismatch(name, metadata.channel_count(), args.len()));
    }

    let data = args
        .iter()
        .zip(metadata.channels)
        .map(|(arg, spec)| parse_argument(arg, spec))
        .collect::<Result<Vec<f64>>>()?;

    trace!(expr = value, space = %space, "parsed function expression");
    Color::create(space, &data)
}

fn parse_argument(arg: &str, spec: &ChannelSpec) -> Result<f64> {
    let caps = ARGUMENT_REGEX
        .captures(arg)
        .ok_or_else(|| Error::invalid_argument(arg))?;
    let mut value: f64 = caps[1].parse().map_err(|_| Error::invalid_argument(arg))?;

    if caps.get(2).is_some_and(|unit| unit.as_str() == ColorUnit::Percent.suffix()) {
        value = value / 100.0 * spec.scale;
    }
    if spec.value_type == ValueType::Int {
        value = value.round();
    }
    Ok(value)
}

/// Serializes a color in its own space, e.g. `hsla(180,50%,25%,0.4)`.
///
/// Integer channels are rounded. Float channels keep up to three decimals
/// with trailing zeros removed. Percent channels are written as the
/// percentage of their scale.
///
/// # Example
///
/// ```
/// use dye_core::{expr, Color};
///
/// assert_eq!(expr::to_function(&Color::rgba(0.0, 127.5, 255.0, 0.5)), "rgba(0,128,255,0.5)");
/// assert_eq!(expr::to_function(&Color::hsl(180.0, 0.5, 0.5)), "hsl(180,50%,50%)");
/// ```
pub fn to_function(color: &Color) -> String {
    let args: Vec<String> = color
        .data()
        .iter()
        .zip(color.metadata().channels)
        .map(|(&value, spec)| format_argument(value, spec))
        .collect();
    format!("{}({})", color.space(), args.join(","))
}

fn format_argument(value: f64, spec: &ChannelSpec) -> String {
    match (spec.unit, spec.value_type) {
        (ColorUnit::Percent, _) => {
            format!("{}{}", format_float(value / spec.scale * 100.0), ColorUnit::Percent.suffix())
        }
        (ColorUnit::Fixed, ValueType::Int) => format_int(value),
        (ColorUnit::Fixed, ValueType::Float) => format_float(value),
    }
}

fn format_int(value: f64) -> String {
    let rounded = value.round();
    // Avoid printing "-0".
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.0}")
}

/// Formats `value` with three decimals, then strips trailing zeros and a
/// dangling decimal point. Zero is written as `0`.
///
/// ```
/// use dye_core::expr::format_float;
///
/// assert_eq!(format_float(0.5), "0.5");
/// assert_eq!(format_float(180.0), "180");
/// assert_eq!(format_float(1.0 / 3.0), "0.333");
/// assert_eq!(format_float(0.0), "0");
/// ```
pub fn format_float(value: f64) -> String {
    let fixed = format!("{value:.3}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_percent() {
        assert_eq!(parse_function("rgb(0,0,0)").unwrap(), Color::rgb(0.0, 0.0, 0.0));
        assert_eq!(
            parse_function("rgb(25%, 127 ,75%)").unwrap(),
            Color::rgb(64.0, 127.0, 191.0)
        );
        assert_eq!(
            parse_function("hsla(50%, 0.1, 25%, .4)").unwrap(),
            Color::hsla(180.0, 0.1, 0.25, 0.4)
        );
        assert_eq!(
            parse_function("rgba(0%, 50%, 100%, .5)").unwrap(),
            Color::rgba(0.0, 128.0, 255.0, 0.5)
        );
    }

    #[test]
    fn test_parse_rounds_int_channels_only() {
        assert_eq!(parse_function("rgb(1.4, 1.5, 254.9)").unwrap().data(), &[1.0, 2.0, 255.0]);
        assert_eq!(parse_function("hsl(1.25, 0.5, 0.5)").unwrap().data(), &[1.25, 0.5, 0.5]);
    }

    #[test]
    fn test_parse_non_percent_units_are_fixed() {
        assert_eq!(
            parse_function("hsl(120deg, 50%, 50%)").unwrap(),
            Color::hsl(120.0, 0.5, 0.5)
        );
        assert_eq!(parse_function("rgb(1,2px,3)").unwrap(), Color::rgb(1.0, 2.0, 3.0));
        assert_eq!(parse_function("hsla(-30deg,.5,.5,.25)").unwrap().data(), &[-30.0, 0.5, 0.5, 0.25]);
    }

    #[test]
    fn test_parse_signed_and_surrounding_space() {
        assert_eq!(
            parse_function("  hsl(-30, +.5, 1.)  ").unwrap(),
            Color::hsl(-30.0, 0.5, 1.0)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_function("not a color").unwrap_err(),
            Error::invalid_function("not a color")
        );
        assert_eq!(parse_function("rgb()").unwrap_err(), Error::invalid_function("rgb()"));
        assert_eq!(parse_function("foo(1,2,3)").unwrap_err(), Error::unknown_space("foo"));
        assert_eq!(parse_function("lab(1,2,3)").unwrap_err(), Error::unknown_space("lab"));
        assert_eq!(
            parse_function("hsl(1,2)").unwrap_err(),
            Error::argument_count_mismatch("hsl", 3, 2)
        );
        assert_eq!(parse_function("rgb(1,x,3)").unwrap_err(), Error::invalid_argument("x"));
        assert_eq!(parse_function("rgb(1,,3)").unwrap_err(), Error::invalid_argument(""));
        assert_eq!(parse_function("rgb(1,2.5.5,3)").unwrap_err(), Error::invalid_argument("2.5.5"));
        assert_eq!(parse_function("rgb(1,px,3)").unwrap_err(), Error::invalid_argument("px"));
        assert_eq!(parse_function("rgb(1,2 px,3)").unwrap_err(), Error::invalid_argument("2 px"));
    }

    #[test]
    fn test_to_function() {
        assert_eq!(to_function(&Color::rgb(0.0, 0.0, 0.0)), "rgb(0,0,0)");
        assert_eq!(to_function(&Color::rgb(12.4, 12.5, -0.2)), "rgb(12,13,0)");
        assert_eq!(to_function(&Color::hsla(180.0, 0.1, 0.25, 0.4)), "hsla(180,10%,25%,0.4)");
        assert_eq!(to_function(&Color::hsl(123.4567, 0.0, 1.0)), "hsl(123.457,0%,100%)");
    }

    #[test]
    fn test_format_float_strips_only_fraction_zeros() {
        assert_eq!(format_float(100.0), "100");
        assert_eq!(format_float(10.5), "10.5");
        assert_eq!(format_float(-0.0001), "0");
        assert_eq!(format_float(2.0006), "2.001");
    }

    #[test]
    fn test_function_round_trip() {
        for c in [
            Color::rgb(1.0, 2.0, 3.0),
            Color::rgba(255.0, 128.0, 0.0, 0.25),
            Color::hsl(200.0, 0.5, 0.75),
            Color::hsla(10.0, 0.125, 0.5, 1.0),
        ] {
            assert_eq!(parse_function(&to_function(&c)).unwrap(), c);
        }
    }
}

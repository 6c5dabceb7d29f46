//! The unified parse entry point.
//!
//! Resolution order:
//!
//! 1. Exact, case-sensitive match in the name registry (`cornflowerBlue`)
//! 2. Hex notation when the text starts with `#` (`#6495ed`)
//! 3. Functional notation otherwise (`rgb(100, 149, 237)`)

use dye_core::{expr, Color};
use tracing::trace;

use crate::DyeResult;

/// Parses a named, hex or functional color expression.
///
/// # Errors
///
/// The hex or functional parser's error when the text is not a known name.
///
/// # Example
///
/// ```
/// use dye::{parse_color, Color};
///
/// let a = parse_color("cornflowerBlue")?;
/// let b = parse_color("#6495ed")?;
/// let c = parse_color("rgb(100, 149, 237)")?;
/// assert_eq!(a, b);
/// assert_eq!(b, c);
/// # Ok::<(), dye::DyeError>(())
/// ```
pub fn parse_color(value: &str) -> DyeResult<Color> {
    if let Some(color) = dye_names::lookup(value) {
        trace!(value, "resolved color name");
        return Ok(color);
    }
    let color = if value.starts_with('#') {
        expr::parse_hex(value)?
    } else {
        expr::parse_function(value)?
    };
    Ok(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DyeError;
    use dye_core::Error;

    #[test]
    fn test_resolution_order() {
        assert_eq!(parse_color("black").unwrap().to_string(), "#000");
        assert_eq!(parse_color("white").unwrap().to_string(), "#fff");
        assert_eq!(parse_color("#0080ff").unwrap(), Color::rgb(0.0, 128.0, 255.0));
        assert_eq!(parse_color("hsl(180, .5, .5)").unwrap(), Color::hsl(180.0, 0.5, 0.5));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!(matches!(
            parse_color("Black"),
            Err(DyeError::Core(Error::InvalidFunctionExpression { .. }))
        ));
    }

    #[test]
    fn test_errors_pass_through() {
        assert!(matches!(
            parse_color("#12"),
            Err(DyeError::Core(Error::InvalidHexExpression { .. }))
        ));
        assert!(matches!(
            parse_color("hsl(1,2)"),
            Err(DyeError::Core(Error::ArgumentCountMismatch { expected: 3, got: 2, .. }))
        ));
    }
}

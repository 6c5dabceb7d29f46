//! Adjust command: channel adjustments applied in a fixed order.

use crate::AdjustArgs;
use anyhow::Result;
use dye::Color;

use super::ColorReport;

/// Runs the adjust command.
///
/// Order: rotate, lighten, darken, tint, tone, fade-in, fade-out, invert,
/// grayscale.
pub fn run(args: AdjustArgs, json: bool) -> Result<()> {
    let color = super::parse(&args.color)?;
    let adjusted = apply(&args, color);

    if json {
        return super::print_json(&ColorReport::new(&adjusted));
    }
    super::print_line(&args.color, &adjusted);
    Ok(())
}

fn apply(args: &AdjustArgs, mut color: Color) -> Color {
    let steps: [(Option<f64>, fn(&Color, f64) -> Color); 7] = [
        (args.rotate, Color::complement),
        (args.lighten, Color::lighten),
        (args.darken, Color::darken),
        (args.tint, Color::tint),
        (args.tone, Color::tone),
        (args.fade_in, Color::fade_in),
        (args.fade_out, Color::fade_out),
    ];
    for (amount, step) in steps {
        if let Some(amount) = amount {
            color = step(&color, amount);
        }
    }
    if args.invert {
        color = color.invert();
    }
    if args.grayscale {
        color = color.grayscale();
    }
    color
}

//! Show command: every notation and channel of a color.

use crate::ShowArgs;
use anyhow::Result;
use dye::{expr, Color};
use serde::Serialize;

use super::ColorReport;

#[derive(Serialize)]
struct ShowReport<'a> {
    input: &'a str,
    #[serde(flatten)]
    color: ColorReport,
    hex: String,
    rgb: String,
    rgba: String,
    hsl: String,
    hsla: String,
}

/// Runs the show command.
pub fn run(args: ShowArgs, json: bool, verbose: bool) -> Result<()> {
    let colors = args
        .colors
        .iter()
        .map(|input| Ok((input.as_str(), super::parse(input)?)))
        .collect::<Result<Vec<(&str, Color)>>>()?;

    if json {
        let reports: Vec<ShowReport> = colors.iter().map(|(input, c)| report(input, c)).collect();
        return super::print_json(&reports);
    }

    for (idx, (input, color)) in colors.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        print_text(input, color, verbose);
    }
    Ok(())
}

fn report<'a>(input: &'a str, color: &Color) -> ShowReport<'a> {
    ShowReport {
        input,
        color: ColorReport::new(color),
        hex: expr::to_hex(color),
        rgb: expr::to_function(&color.to_rgb()),
        rgba: expr::to_function(&color.to_rgba()),
        hsl: expr::to_function(&color.to_hsl()),
        hsla: expr::to_function(&color.to_hsla()),
    }
}

fn print_text(input: &str, color: &Color, verbose: bool) {
    let r = report(input, color);
    println!("{input}");
    println!("  CSS:   {}", r.color.css);
    println!("  Hex:   {}", r.hex);
    println!("  RGB:   {}", r.rgb);
    println!("  RGBA:  {}", r.rgba);
    println!("  HSL:   {}", r.hsl);
    println!("  HSLA:  {}", r.hsla);

    if verbose {
        println!("  Space: {}", color.space());
        for (spec, value) in color.metadata().channels.iter().zip(color.data()) {
            println!("    {:<11} {} / {}", spec.name, expr::format_float(*value), spec.scale);
        }
    }
}

//! Convert command.

use crate::ConvertArgs;
use anyhow::{Context, Result};
use dye::ColorSpace;
use tracing::debug;

use super::ColorReport;

/// Runs the convert command, printing the functional form in the target space.
pub fn run(args: ConvertArgs, json: bool) -> Result<()> {
    let color = super::parse(&args.color)?;
    let space: ColorSpace = args.to.parse()?;
    let converted = dye::convert(&color, space)
        .with_context(|| format!("Cannot convert {} to {space}", args.color))?;
    debug!(from = %color.space(), to = %space, "converted");

    if json {
        return super::print_json(&ColorReport::new(&converted));
    }
    println!("{}", dye::expr::to_function(&converted));
    Ok(())
}

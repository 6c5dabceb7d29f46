//! Mix command.

use crate::config::Config;
use crate::MixArgs;
use anyhow::Result;
use dye::MixMode;

use super::ColorReport;

/// Runs the mix command. Without `--mode` the configured mode is used.
pub fn run(args: MixArgs, config: &Config, json: bool) -> Result<()> {
    let a = super::parse(&args.a)?;
    let b = super::parse(&args.b)?;
    let mode: MixMode = match &args.mode {
        Some(mode) => mode.parse()?,
        None => config.mix_mode()?,
    };
    let mixed = dye::mix(&a, &b, mode);

    if json {
        return super::print_json(&ColorReport::new(&mixed));
    }
    super::print_line(mode.name(), &mixed);
    Ok(())
}

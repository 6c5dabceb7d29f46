//! Names command: list or search the named color registry.

use crate::NamesArgs;
use anyhow::{Context, Result};
use std::collections::BTreeMap;

/// Runs the names command.
pub fn run(args: NamesArgs, json: bool, verbose: bool) -> Result<()> {
    let pattern = args.pattern.as_deref().unwrap_or("");
    let found = dye::names::find(pattern)
        .with_context(|| format!("Invalid name pattern: {pattern}"))?;

    if json {
        let map: BTreeMap<&str, String> =
            found.iter().map(|(name, c)| (name.as_str(), c.to_string())).collect();
        return super::print_json(&map);
    }
    for (name, color) in &found {
        println!("{name:<24} {color}");
    }
    if verbose {
        println!("{} of {} names", found.len(), dye::names::len());
    }
    Ok(())
}

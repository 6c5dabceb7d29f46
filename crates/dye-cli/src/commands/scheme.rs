//! Scheme command.

use crate::config::Config;
use crate::SchemeArgs;
use anyhow::Result;
use dye::{SchemeKind, SchemeOptions};
use serde::Serialize;

use super::ColorReport;

#[derive(Serialize)]
struct SchemeEntry<'a> {
    key: &'a str,
    #[serde(flatten)]
    color: ColorReport,
}

/// Runs the scheme command, printing one line per key in scheme order.
pub fn run(args: SchemeArgs, config: &Config, json: bool) -> Result<()> {
    let color = super::parse(&args.color)?;
    let kind: SchemeKind = args.kind.parse()?;
    let defaults = config.scheme_options();
    let options = SchemeOptions::new(
        args.start.unwrap_or(defaults.start),
        args.step.unwrap_or(defaults.step),
    );
    let scheme = kind.build(&color, options);

    if json {
        let entries: Vec<SchemeEntry> = scheme
            .iter()
            .map(|(key, c)| SchemeEntry { key, color: ColorReport::new(c) })
            .collect();
        return super::print_json(&entries);
    }
    for (key, c) in scheme.iter() {
        super::print_line(key, c);
    }
    Ok(())
}

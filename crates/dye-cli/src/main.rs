//! dye - color expression command-line tool
//!
//! Inspects, converts, adjusts, mixes and builds schemes from color
//! expressions (`cornflowerBlue`, `#6495ed`, `hsl(219, 79%, 66%)`).

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "dye")]
#[command(author, version, about = "Color expression toolkit")]
#[command(long_about = "
Parse, convert and derive colors from named, hex and functional expressions.

Examples:
  dye show cornflowerBlue '#0af'          # All notations and channels
  dye convert '#6495ed' --to hsl          # Functional form in another space
  dye adjust 'hsl(200, 50%, 40%)' --lighten 0.1 --rotate 30
  dye mix red blue --mode average
  dye scheme '#6495ed' --kind triadic
  dye names '^cornflower'                 # Search named colors
  dye --json show 'rgba(0, 0, 0, .5)'
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (YAML); falls back to $DYE_CONFIG
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Verbose output (also raises logging to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Machine-readable output (JSON)
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a color in every notation with its channels
    #[command(visible_alias = "s")]
    Show(ShowArgs),

    /// Convert a color to another space
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Apply channel adjustments
    #[command(visible_alias = "a")]
    Adjust(AdjustArgs),

    /// Mix two colors
    Mix(MixArgs),

    /// Build a color scheme
    Scheme(SchemeArgs),

    /// List named colors
    #[command(visible_alias = "n")]
    Names(NamesArgs),
}

/// Arguments for the `show` command.
#[derive(Args)]
struct ShowArgs {
    /// Color expression(s)
    #[arg(required = true)]
    colors: Vec<String>,
}

/// Arguments for the `convert` command.
#[derive(Args)]
struct ConvertArgs {
    /// Color expression
    color: String,

    /// Target space: rgb, rgba, hsl, hsla
    #[arg(short, long)]
    to: String,
}

/// Arguments for the `adjust` command.
///
/// Adjustments apply in the order listed here.
#[derive(Args)]
struct AdjustArgs {
    /// Color expression
    color: String,

    /// Rotate hue by degrees
    #[arg(short, long, allow_negative_numbers = true)]
    rotate: Option<f64>,

    /// Raise lightness
    #[arg(long)]
    lighten: Option<f64>,

    /// Lower lightness
    #[arg(long)]
    darken: Option<f64>,

    /// Raise saturation
    #[arg(long)]
    tint: Option<f64>,

    /// Lower saturation
    #[arg(long)]
    tone: Option<f64>,

    /// Raise opacity
    #[arg(long)]
    fade_in: Option<f64>,

    /// Lower opacity
    #[arg(long)]
    fade_out: Option<f64>,

    /// Invert RGB channels
    #[arg(long)]
    invert: bool,

    /// Drop saturation entirely
    #[arg(long)]
    grayscale: bool,
}

/// Arguments for the `mix` command.
#[derive(Args)]
struct MixArgs {
    /// First color expression
    a: String,

    /// Second color expression
    b: String,

    /// Mix mode: additive, subtractive, average (default from config)
    #[arg(short, long)]
    mode: Option<String>,
}

/// Arguments for the `scheme` command.
#[derive(Args)]
struct SchemeArgs {
    /// Base color expression
    color: String,

    /// Scheme kind: light, dark, shade, complementary, analogous, split,
    /// triadic, square, tetradic
    #[arg(short, long, default_value = "shade")]
    kind: String,

    /// First generator value for shade kinds (default from config)
    #[arg(long, allow_negative_numbers = true)]
    start: Option<f64>,

    /// Generator increment for shade kinds (default from config)
    #[arg(long, allow_negative_numbers = true)]
    step: Option<f64>,
}

/// Arguments for the `names` command.
#[derive(Args)]
struct NamesArgs {
    /// Regex filter over names
    pattern: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    config.register_palette()?;

    match cli.command {
        Commands::Show(args) => commands::show::run(args, cli.json, cli.verbose),
        Commands::Convert(args) => commands::convert::run(args, cli.json),
        Commands::Adjust(args) => commands::adjust::run(args, cli.json),
        Commands::Mix(args) => commands::mix::run(args, &config, cli.json),
        Commands::Scheme(args) => commands::scheme::run(args, &config, cli.json),
        Commands::Names(args) => commands::names::run(args, cli.json, cli.verbose),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `--log-level`.
fn init_logging(level: &str, verbose: bool) {
    let level = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

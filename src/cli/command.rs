//! Command-line interface definitions.
//!
//! Defines the CLI structure for the surebet calculator using `clap`.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Surebet detection and stake allocation calculator
#[derive(Parser, Debug)]
#[command(name = "surebet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file [default: ~/.surebet/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check odds for a surebet and split a total stake across outcomes
    Calc(CalcArgs),

    /// Scale existing stakes to a new total, keeping their proportions
    Rescale(RescaleArgs),

    /// Fix the stake on one outcome and re-solve the others for equal payout
    Fix(FixArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `surebet config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a documented configuration file.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file.
    Validate,
}

/// Arguments for the `calc` subcommand.
#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// Decimal odds, one per outcome (e.g. 2.5 2.2)
    #[arg(required = true, num_args = 1..)]
    pub odds: Vec<Decimal>,

    /// Total stake to split [default: calculator.default_total_stake]
    #[arg(short, long)]
    pub stake: Option<Decimal>,

    /// Round stakes to multiples of this unit (0 disables)
    #[arg(short, long)]
    pub round_to: Option<Decimal>,
}

/// Arguments for the `rescale` subcommand.
#[derive(Parser, Debug)]
pub struct RescaleArgs {
    /// Current stakes, comma separated (e.g. 50,50)
    #[arg(long, value_delimiter = ',', required = true)]
    pub stakes: Vec<Decimal>,

    /// New total stake
    #[arg(long)]
    pub total: Decimal,

    /// Odds, comma separated; when given, profit is reported too
    #[arg(long, value_delimiter = ',')]
    pub odds: Option<Vec<Decimal>>,
}

/// Arguments for the `fix` subcommand.
#[derive(Parser, Debug)]
pub struct FixArgs {
    /// Decimal odds, one per outcome
    #[arg(required = true, num_args = 1..)]
    pub odds: Vec<Decimal>,

    /// Round the re-solved stakes to multiples of this unit (0 disables)
    #[arg(short, long)]
    pub round_to: Option<Decimal>,

    /// Zero-based index of the outcome to fix (A = 0, B = 1, ...)
    #[arg(long)]
    pub index: usize,

    /// Stake to place on the fixed outcome
    #[arg(long)]
    pub value: Decimal,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

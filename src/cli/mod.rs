//! Command-line interface: argument parsing, dispatch and output.

pub mod calc;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod fix;
pub mod format;
pub mod output;
pub mod report;
pub mod rescale;

use std::io::IsTerminal;
use std::path::Path;

use tracing::debug;

use self::command::{Cli, ColorChoice, Commands, ConfigCommand};
use self::output::OutputConfig;
use crate::config::{Config, LoggingConfig};
use crate::error::Result;

/// Apply global flags, load configuration and run the selected command.
pub fn run(cli: Cli) -> Result<()> {
    apply_color(&cli.color);
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let config_path = cli.config.as_deref();
    let overrides = LogOverrides {
        level: cli.log_level.as_deref(),
        json: cli.json_logs,
        verbose: cli.verbose,
        ansi: ansi_logs(&cli.color),
    };

    let command = match cli.command {
        Commands::Config(command) => {
            init_logging(LoggingConfig::default(), overrides);
            return match command {
                ConfigCommand::Init(args) => config::execute_init(config_path, args.force),
                ConfigCommand::Show => config::execute_show(config_path),
                ConfigCommand::Validate => config::execute_validate(config_path),
            };
        }
        command => command,
    };

    let config = Config::resolve(config_path)?;
    init_logging(config.logging.clone(), overrides);
    debug!(config = ?config_path.map(Path::display), "starting command");

    match command {
        Commands::Calc(args) => calc::execute(&config, args),
        Commands::Rescale(args) => rescale::execute(&config, args),
        Commands::Fix(args) => fix::execute(&config, args),
        Commands::Config(_) => Ok(()),
    }
}

fn apply_color(choice: &ColorChoice) {
    match choice {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
}

/// Logging flags given on the command line.
#[derive(Debug, Clone, Copy)]
struct LogOverrides<'a> {
    level: Option<&'a str>,
    json: bool,
    verbose: u8,
    ansi: bool,
}

/// Escape codes in log lines follow `--color`; `auto` checks stderr.
fn ansi_logs(choice: &ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stderr().is_terminal(),
    }
}

/// Install the subscriber with command-line overrides applied.
///
/// Each `-v` raises the default level one step above `warn`.
fn init_logging(mut logging: LoggingConfig, overrides: LogOverrides<'_>) {
    if let Some(level) = overrides.level {
        logging.level = level.to_string();
    } else if overrides.verbose > 0 {
        logging.level = match overrides.verbose {
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string();
    }
    if overrides.json {
        logging.format = "json".to_string();
    }
    logging.init(overrides.ansi);
}

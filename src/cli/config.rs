//! Handler for the `config` command group.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

use super::diagnostic::ConfigDiagnostic;
use super::format::Formatter;
use super::output;
use crate::config::{paths, Config};
use crate::error::{ConfigError, Error, Result};

/// Default config template with documentation.
pub const CONFIG_TEMPLATE: &str = include_str!("../../config.toml.example");

fn target_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map(Path::to_path_buf).unwrap_or_else(paths::default_config)
}

/// Execute `config init`.
pub fn execute_init(explicit: Option<&Path>, force: bool) -> Result<()> {
    let path = target_path(explicit);
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, CONFIG_TEMPLATE)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.init",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::hint(&format!(
        "run {} to check your edits",
        output::highlight(format!("surebet config validate -c {}", path.display()))
    ));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(explicit: Option<&Path>) -> Result<()> {
    let config = Config::resolve(explicit)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "config": serde_json::to_value(&config)?,
        }));
        return Ok(());
    }

    let formatter = Formatter::new(&config.display);
    let calculator = &config.calculator;

    output::section("Calculator");
    output::field(
        "Total stake",
        calculator
            .default_total_stake
            .map(|total| formatter.amount(total))
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    output::field(
        "Round to",
        calculator
            .rounding_unit()
            .map(|unit| formatter.amount(unit))
            .unwrap_or_else(|| "disabled".to_string()),
    );
    output::field(
        "Outcomes",
        format!("{}..={}", calculator.min_outcomes, calculator.max_outcomes),
    );

    output::section("Display");
    output::field("Currency", &config.display.currency);
    output::field("Decimals", config.display.decimals);

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`.
///
/// Parse errors are rendered with the offending part of the file.
pub fn execute_validate(explicit: Option<&Path>) -> Result<()> {
    let path = target_path(explicit);
    let content = fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;

    match Config::parse_toml(&content) {
        Ok(_) => {
            if output::is_json() {
                output::json_output(json!({
                    "command": "config.validate",
                    "path": path.display().to_string(),
                    "valid": true,
                }));
            } else {
                output::success(&format!("{} is valid", path.display()));
            }
            Ok(())
        }
        Err(Error::Config(ConfigError::Parse(err))) => {
            if !output::is_json() {
                eprintln!("{}", ConfigDiagnostic::from_toml(&err, &content).render());
            }
            Err(ConfigError::Parse(err).into())
        }
        Err(err) => Err(err),
    }
}

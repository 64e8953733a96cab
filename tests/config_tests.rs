use std::fs;
use std::path::PathBuf;

use rust_decimal_macros::dec;
use tempfile::TempDir;

use surebet::config::Config;
use surebet::domain::OutcomeLimits;
use surebet::error::{ConfigError, Error};

fn write_temp_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn config_loads_calculator_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_temp_config(
        &dir,
        r#"
[calculator]
default_total_stake = 100
round_to = 1
max_outcomes = 4
"#,
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.calculator.default_total_stake, Some(dec!(100)));
    assert_eq!(config.calculator.rounding_unit(), Some(dec!(1)));
    assert_eq!(config.calculator.limits(), OutcomeLimits::new(2, 4));
    assert_eq!(config.display.currency, "R$");
}

#[test]
fn config_rejects_out_of_range_decimals() {
    let dir = TempDir::new().unwrap();
    let path = write_temp_config(&dir, "[display]\ndecimals = 12\n");

    match Config::load(&path) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "decimals", ..
        })) => {}
        Err(err) => panic!("Expected invalid decimals error, got {err}"),
        Ok(config) => panic!(
            "Expected decimals to be rejected, got {}",
            config.display.decimals
        ),
    }
}

#[test]
fn config_reports_unreadable_file() {
    let dir = TempDir::new().unwrap();
    let result = Config::load(dir.path().join("missing.toml"));

    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
}

#[test]
fn config_reports_malformed_toml() {
    let dir = TempDir::new().unwrap();
    let path = write_temp_config(&dir, "[calculator]\nround_to = = 1\n");

    assert!(matches!(
        Config::load(&path),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn explicit_path_takes_precedence() {
    let dir = TempDir::new().unwrap();
    let path = write_temp_config(&dir, "[display]\ncurrency = \"$\"\n");

    let config = Config::resolve(Some(path.as_path())).unwrap();

    assert_eq!(config.display.currency, "$");
}

#[test]
fn bundled_template_is_valid() {
    let template = include_str!("../config.toml.example");

    let config = Config::parse_toml(template).unwrap();

    assert_eq!(config, Config::default());
}

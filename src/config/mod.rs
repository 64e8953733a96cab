//! Configuration loading, logging setup and well-known paths.

pub mod logging;
pub mod paths;
pub mod settings;

pub use logging::LoggingConfig;
pub use settings::{CalculatorConfig, Config, DisplayConfig};

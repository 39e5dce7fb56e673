//! Miette report conversion for CLI errors.

use kiln_config::ConfigError;
use miette::Report;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        other => miette::miette!("{}", other),
    }
}

/// Convert a layout/validation error, surfacing its hint when it has one
fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::SchemaValidation {
            message,
            hint: Some(hint),
        } => miette::miette!(help = hint, "Invalid configuration: {}", message),
        ConfigError::InvalidValue {
            field,
            hint: Some(hint),
        } => miette::miette!(help = hint, "Invalid value for `{}` in kiln.toml", field),
        ConfigError::EntryNotFound { path } => miette::miette!(
            help = "Create the entry module or set `entry` in kiln.toml",
            "Entry point not found: {}",
            path.display()
        ),
        ConfigError::TemplateNotFound { path } => miette::miette!(
            help = "Create the template or set `template` in kiln.toml",
            "HTML template not found: {}",
            path.display()
        ),
        other => miette::miette!("Configuration error: {}", other),
    }
}

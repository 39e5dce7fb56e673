//! Check command implementation.
//!
//! Validates the layout without invoking the bundler.

use kiln_config::{validate_fs, BuildMode, ConfigDiscovery};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the layout (defaults, `kiln.toml`, `KILN_*` variables)
/// 2. Check ports, host and rule patterns
/// 3. Check the entry module and HTML template exist
pub fn execute(args: CheckArgs, env_mode: BuildMode) -> Result<()> {
    ui::info("Checking project layout...");

    let root = utils::project_root(&args.project)?;
    match ConfigDiscovery::new(&root).find() {
        Some(path) => ui::info(&format!("Using {}", path.display())),
        None => ui::warning("No kiln.toml found, using the built-in layout"),
    }

    let descriptor = utils::assemble(&args.project, env_mode)?;
    if let Err(err) = validate_fs(&descriptor) {
        ui::error(&err.to_string());
        return Err(err.into());
    }

    ui::success(&format!("  entry {}", descriptor.entry().display()));
    ui::success(&format!(
        "  {} mode, {} rules, {} plugins",
        descriptor.mode(),
        descriptor.rules().len(),
        descriptor.plugins().len()
    ));
    ui::success("All checks passed!");
    Ok(())
}

//! Print command implementation.

use kiln_config::BuildMode;

use crate::cli::PrintArgs;
use crate::commands::utils;
use crate::error::Result;

/// Execute the print command.
///
/// Writes the descriptor JSON to stdout; diagnostics go to stderr.
pub fn execute(args: PrintArgs, env_mode: BuildMode) -> Result<()> {
    let descriptor = utils::assemble(&args.project, env_mode)?;

    let json = if args.compact {
        serde_json::to_string(&descriptor)?
    } else {
        descriptor.to_json_pretty()?
    };
    println!("{json}");
    Ok(())
}

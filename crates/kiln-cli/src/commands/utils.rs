//! Helpers shared by the commands.

use std::path::PathBuf;

use kiln_config::{resolve, BuildDescriptor, BuildMode, ConfigDiscovery};

use crate::cli::ProjectArgs;
use crate::error::Result;

/// Project root from `--root`, or the current directory.
pub fn project_root(args: &ProjectArgs) -> Result<PathBuf> {
    match &args.root {
        Some(root) if root.is_absolute() => Ok(root.clone()),
        Some(root) => Ok(std::env::current_dir()?.join(root)),
        None => Ok(std::env::current_dir()?),
    }
}

/// `--mode` if given, otherwise the mode read from the environment.
pub fn effective_mode(args: &ProjectArgs, env_mode: BuildMode) -> BuildMode {
    args.mode.map(BuildMode::from).unwrap_or(env_mode)
}

/// Load the layout and assemble the descriptor for the selected mode.
pub fn assemble(args: &ProjectArgs, env_mode: BuildMode) -> Result<BuildDescriptor> {
    let root = project_root(args)?;
    let layout = ConfigDiscovery::new(&root).load()?;
    let mode = effective_mode(args, env_mode);
    tracing::debug!(%mode, root = %root.display(), "assembling descriptor");

    Ok(BuildDescriptor::assemble(&resolve(mode), &layout))
}

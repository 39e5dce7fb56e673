use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::ModeArg;

/// Available Kiln subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the build descriptor as JSON
    ///
    /// The output is the exact object handed to the bundler: entry, output
    /// naming, dev server, devtool, plugins and module rules.
    Print(PrintArgs),

    /// Validate the project layout
    ///
    /// Checks the descriptor's schema and that the entry module and HTML
    /// template exist on disk.
    Check(CheckArgs),

    /// Show the output filename for a source file
    ///
    /// Images, svg and fonts use their content-addressed asset template. The
    /// page and extracted stylesheet come from their plugins; scripts land in
    /// the entry chunk.
    Name(NameArgs),
}

/// Arguments shared by every command that assembles a descriptor
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Build mode, replacing the NODE_ENV reading
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,
}

/// Arguments for the print command
#[derive(Args, Debug)]
pub struct PrintArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Arguments for the name command
#[derive(Args, Debug)]
pub struct NameArgs {
    /// Source file to name
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub project: ProjectArgs,
}

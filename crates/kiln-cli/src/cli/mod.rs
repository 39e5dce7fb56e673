//! Command-line interface definition for Kiln.
//!
//! # Command Structure
//!
//! - `kiln print` - Print the assembled build descriptor as JSON
//! - `kiln check` - Validate the project against the descriptor
//! - `kiln name` - Show the output name a source file would get

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, NameArgs, PrintArgs, ProjectArgs};
pub use enums::*;

/// Kiln - build descriptor resolver for front-end bundles
#[derive(Parser, Debug)]
#[command(
    name = "kiln",
    version,
    about = "Resolve the front-end build descriptor",
    long_about = "Kiln assembles the configuration handed to the bundler.\n\
                  The build mode comes from NODE_ENV: `development` selects fast\n\
                  eval source maps, injected styles and stable file names; anything\n\
                  else selects standalone maps, extracted styles and hashed names."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

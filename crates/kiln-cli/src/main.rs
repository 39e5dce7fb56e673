//! Kiln CLI - resolve and inspect the front-end build descriptor.
//!
//! Handles argument parsing, logging initialization, and command dispatch.

use clap::Parser;
use kiln_cli::{cli, commands, error, logger, ui};
use kiln_config::BuildMode;
use miette::Result;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    // The environment is consulted once, here; commands only see the value
    let env_mode = BuildMode::from_env();

    let result = match args.command {
        cli::Command::Print(print_args) => commands::print_execute(print_args, env_mode),
        cli::Command::Check(check_args) => commands::check_execute(check_args, env_mode),
        cli::Command::Name(name_args) => commands::name_execute(name_args, env_mode),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}

//! Kiln CLI - resolve and inspect the front-end build descriptor.
//!
//! The heavy lifting lives in `kiln-config`; this crate reads the build mode
//! once, loads the project layout and exposes the result on the command line.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - `commands` - `print`, `check` and `name`
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Colored status messages

// Public modules
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result};

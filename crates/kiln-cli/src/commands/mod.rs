//! Command implementations for the Kiln CLI.
//!
//! - [`print`] - Print the build descriptor
//! - [`check`] - Validate the project layout
//! - [`name`] - Render output filenames
//!
//! Each command provides an `execute` function taking its parsed arguments
//! and the build mode read at startup.

pub mod check;
pub mod name;
pub mod print;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use name::execute as name_execute;
pub use print::execute as print_execute;

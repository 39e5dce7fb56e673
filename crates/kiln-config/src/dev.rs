//! Development server settings.
//!
//! These are passed through to the external dev server untouched.

use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevServerConfig {
    #[serde(rename = "static")]
    pub static_files: StaticFiles,

    pub host: String,

    pub port: u16,

    /// Open a browser tab once the server is up
    pub open: bool,

    /// Live reload / hot replacement
    pub hot: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticFiles {
    /// Directory served at the site root
    pub directory: PathBuf,
}

//! Static project layout.
//!
//! Paths are stored relative to the project root and resolved on demand.
//! Nothing in here depends on the build mode.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::bundle::helpers::{
    default_entry, default_host, default_output_dir, default_port, default_template, default_true,
};

/// Keys accepted in `kiln.toml` and as `KILN_*` variables.
pub const LAYOUT_KEYS: &[&str] = &[
    "entry",
    "template",
    "output_dir",
    "host",
    "port",
    "open",
    "hot",
];

/// Mode-independent inputs of the build descriptor.
///
/// Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectLayout {
    /// Directory every relative path is resolved against
    #[serde(skip)]
    pub root: PathBuf,

    /// Entry module
    #[serde(default = "default_entry")]
    pub entry: PathBuf,

    /// HTML template the page is generated from
    #[serde(default = "default_template")]
    pub template: PathBuf,

    /// Build output directory, also served by the dev server
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_true")]
    pub open: bool,

    #[serde(default = "default_true")]
    pub hot: bool,
}

impl ProjectLayout {
    /// Built-in layout rooted at `root`.
    pub fn defaults(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            entry: default_entry(),
            template: default_template(),
            output_dir: default_output_dir(),
            host: default_host(),
            port: default_port(),
            open: true,
            hot: true,
        }
    }

    pub fn entry_path(&self) -> PathBuf {
        self.root.join(&self.entry)
    }

    pub fn template_path(&self) -> PathBuf {
        self.root.join(&self.template)
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::defaults(".")
    }
}

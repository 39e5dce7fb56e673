//! Layout loading for CLI use
//!
//! Layers the built-in layout, an optional `kiln.toml` and `KILN_*`
//! environment variables, in increasing priority.

use std::path::{Path, PathBuf};

use figment::{
    error::Kind,
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::error::{ConfigError, Result};
use crate::layout::{ProjectLayout, LAYOUT_KEYS};

/// Name of the optional layout file in the project root.
pub const CONFIG_FILE: &str = "kiln.toml";

/// Prefix of environment variables overriding layout keys (`KILN_PORT=8080`).
pub const ENV_PREFIX: &str = "KILN_";

/// File-based layout discovery
///
/// # Example
///
/// ```no_run
/// use kiln_config::ConfigDiscovery;
///
/// let layout = ConfigDiscovery::new(".").load().unwrap();
/// println!("entry: {}", layout.entry_path().display());
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new discovery rooted at `root`
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of `kiln.toml` if the project has one
    pub fn find(&self) -> Option<PathBuf> {
        let path = self.root.join(CONFIG_FILE);
        path.is_file().then_some(path)
    }

    /// Build the layered figment without extracting it
    pub fn figment(&self) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(ProjectLayout::defaults(
            &self.root,
        )));

        if let Some(path) = self.find() {
            tracing::debug!(path = %path.display(), "loading layout overrides");
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).only(LAYOUT_KEYS))
    }

    /// Load the layout
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `kiln.toml` is malformed, names
    /// an unknown key, or a key has the wrong type.
    pub fn load(&self) -> Result<ProjectLayout> {
        let mut layout: ProjectLayout =
            self.figment()
                .extract()
                .map_err(|e: figment::Error| {
                    let field = match &e.kind {
                        Kind::UnknownField(name, _) => name.clone(),
                        _ => e.path.join("."),
                    };
                    ConfigError::InvalidValue {
                        field,
                        hint: Some(e.to_string()),
                    }
                })?;
        layout.root = self.root.clone();
        Ok(layout)
    }
}

//! Build mode detection.
//!
//! The mode is read from the process environment once, at startup, and then
//! handed around as a plain value. Nothing below this module looks at the
//! environment again.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Environment variable selecting the build mode.
pub const MODE_ENV_VAR: &str = "NODE_ENV";

/// The only value of [`MODE_ENV_VAR`] that selects development mode.
const DEVELOPMENT: &str = "development";

/// Build mode for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    /// Anything that isn't exactly `development`, including an unset variable.
    #[default]
    Production,
}

impl BuildMode {
    /// Read the mode from `NODE_ENV`.
    ///
    /// Call this once per process and pass the result along.
    pub fn from_env() -> Self {
        let raw = std::env::var(MODE_ENV_VAR).ok();
        let mode = Self::from_env_value(raw.as_deref());
        tracing::debug!(value = ?raw, ?mode, "read build mode from {}", MODE_ENV_VAR);
        mode
    }

    /// Map a raw environment value to a mode.
    ///
    /// Only the exact string `development` selects [`BuildMode::Development`].
    /// Absence and every other value fall back to [`BuildMode::Production`].
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::BuildMode;
    ///
    /// assert_eq!(BuildMode::from_env_value(Some("development")), BuildMode::Development);
    /// assert_eq!(BuildMode::from_env_value(Some("staging")), BuildMode::Production);
    /// assert_eq!(BuildMode::from_env_value(None), BuildMode::Production);
    /// ```
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(DEVELOPMENT) => BuildMode::Development,
            _ => BuildMode::Production,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn only_exact_development_selects_development() {
        assert_eq!(
            BuildMode::from_env_value(Some("development")),
            BuildMode::Development
        );
        for other in ["", "dev", "Development", "DEVELOPMENT", " development", "production"] {
            assert_eq!(
                BuildMode::from_env_value(Some(other)),
                BuildMode::Production,
                "{other:?} should fall back to production"
            );
        }
    }

    #[test]
    fn missing_value_is_production() {
        assert_eq!(BuildMode::from_env_value(None), BuildMode::Production);
        assert_eq!(BuildMode::default(), BuildMode::Production);
    }

    #[test]
    #[serial]
    fn from_env_reads_node_env() {
        unsafe {
            std::env::set_var(MODE_ENV_VAR, "development");
        }
        assert_eq!(BuildMode::from_env(), BuildMode::Development);

        unsafe {
            std::env::remove_var(MODE_ENV_VAR);
        }
        assert_eq!(BuildMode::from_env(), BuildMode::Production);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(BuildMode::Development).unwrap(),
            serde_json::json!("development")
        );
        assert_eq!(BuildMode::Production.to_string(), "production");
    }
}

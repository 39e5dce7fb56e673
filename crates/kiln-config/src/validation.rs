//! Pluggable validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation.

use crate::bundle::BuildDescriptor;
use crate::error::{ConfigError, Result};

/// Trait for pluggable validation strategies
pub trait ConfigValidator {
    /// Validate an assembled descriptor
    fn validate(&self, descriptor: &BuildDescriptor) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use kiln_config::{resolve, BuildDescriptor, BuildMode, ConfigValidator, ProjectLayout, SchemaValidator};
///
/// let descriptor = BuildDescriptor::assemble(
///     &resolve(BuildMode::Production),
///     &ProjectLayout::defaults("."),
/// );
/// SchemaValidator.validate(&descriptor).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, descriptor: &BuildDescriptor) -> Result<()> {
        let dev = descriptor.dev_server();
        if dev.port == 0 {
            return Err(ConfigError::SchemaValidation {
                message: "dev server port cannot be 0".to_string(),
                hint: Some("Use a fixed port between 1 and 65535".to_string()),
            });
        }
        if dev.host.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "dev server host cannot be empty".to_string(),
                hint: None,
            });
        }

        for rule in descriptor.rules() {
            rule.compile()?;

            if rule.steps.is_empty() && rule.asset.is_none() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("rule `{}` has no steps", rule.name),
                    hint: Some("Give the rule at least one loader or an asset type".to_string()),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Checks that the entry module and the HTML template exist on disk.
pub struct FsValidator;

impl ConfigValidator for FsValidator {
    fn validate(&self, descriptor: &BuildDescriptor) -> Result<()> {
        // First run schema validation
        SchemaValidator.validate(descriptor)?;

        if !descriptor.entry().is_file() {
            return Err(ConfigError::EntryNotFound {
                path: descriptor.entry().to_path_buf(),
            });
        }

        for plugin in descriptor.plugins() {
            if let crate::bundle::PluginActivation::HtmlTemplate(options) = plugin {
                if !options.template.is_file() {
                    return Err(ConfigError::TemplateNotFound {
                        path: options.template.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(descriptor: &BuildDescriptor) -> Result<()> {
    SchemaValidator.validate(descriptor)
}

/// Convenience function for filesystem validation
pub fn validate_fs(descriptor: &BuildDescriptor) -> Result<()> {
    FsValidator.validate(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ProjectLayout;
    use crate::mode::BuildMode;
    use crate::resolve::resolve;

    fn descriptor(layout: &ProjectLayout) -> BuildDescriptor {
        BuildDescriptor::assemble(&resolve(BuildMode::Production), layout)
    }

    #[test]
    fn schema_validator_accepts_defaults() {
        let layout = ProjectLayout::defaults("/srv/site");
        assert!(validate_schema(&descriptor(&layout)).is_ok());
    }

    #[test]
    fn schema_validator_rejects_port_zero() {
        let mut layout = ProjectLayout::defaults("/srv/site");
        layout.port = 0;
        let err = validate_schema(&descriptor(&layout)).unwrap_err();
        assert!(matches!(err, ConfigError::SchemaValidation { .. }));
    }

    #[test]
    fn schema_validator_rejects_blank_host() {
        let mut layout = ProjectLayout::defaults("/srv/site");
        layout.host = "  ".to_string();
        let err = validate_schema(&descriptor(&layout)).unwrap_err();
        assert!(matches!(err, ConfigError::SchemaValidation { .. }));
    }

    #[test]
    fn outputs_stay_within_root() {
        let layout = ProjectLayout::defaults("/srv/site");
        let descriptor = descriptor(&layout);
        assert!(descriptor.output().path.starts_with(&layout.root));
        assert!(descriptor.entry().starts_with(&layout.root));
    }
}

//! Build descriptor handed to the external bundler.

pub(crate) mod helpers;
mod plugin;
mod rules;

use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

pub use plugin::{
    CssExtractOptions, HtmlTemplateOptions, PluginActivation, CSS_EXTRACT_PLUGIN, HTML_PLUGIN,
};
pub use rules::{
    default_rules, AssetGenerator, AssetKind, AssetModule, LoaderStep, RuleMatcher, TransformRule,
};

use crate::dev::{DevServerConfig, StaticFiles};
use crate::error::Result;
use crate::layout::ProjectLayout;
use crate::mode::BuildMode;
use crate::resolve::ModeSettings;

/// Chunk name the bundler gives a single unnamed entry.
pub const ENTRY_CHUNK: &str = "main";

/// Output location and naming
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputConfig {
    /// Filename pattern for entry chunks
    pub filename: String,

    /// Output directory
    pub path: PathBuf,

    /// Empty the output directory before emitting
    pub clean: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleRules {
    pub rules: Vec<TransformRule>,
}

/// Complete configuration for one build invocation.
///
/// Assembled once from [`ModeSettings`] and a [`ProjectLayout`]; there are no
/// mutating methods.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDescriptor {
    #[serde(skip)]
    settings: ModeSettings,
    mode: BuildMode,
    entry: PathBuf,
    output: OutputConfig,
    dev_server: DevServerConfig,
    devtool: &'static str,
    plugins: Vec<PluginActivation>,
    module: ModuleRules,
}

impl BuildDescriptor {
    /// Merge resolved settings with the static layout.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::{resolve, BuildDescriptor, BuildMode, ProjectLayout};
    ///
    /// let descriptor = BuildDescriptor::assemble(
    ///     &resolve(BuildMode::Production),
    ///     &ProjectLayout::defaults("/srv/site"),
    /// );
    /// assert_eq!(descriptor.output().filename, "[name].[contenthash].js");
    /// assert_eq!(descriptor.devtool(), "source-map");
    /// ```
    pub fn assemble(settings: &ModeSettings, layout: &ProjectLayout) -> Self {
        let output_path = layout.output_path();

        let descriptor = Self {
            settings: *settings,
            mode: settings.mode,
            entry: layout.entry_path(),
            output: OutputConfig {
                filename: settings.naming.pattern("js"),
                path: output_path.clone(),
                clean: true,
            },
            dev_server: DevServerConfig {
                static_files: StaticFiles {
                    directory: output_path,
                },
                host: layout.host.clone(),
                port: layout.port,
                open: layout.open,
                hot: layout.hot,
            },
            devtool: settings.source_map.devtool(),
            plugins: vec![
                PluginActivation::html_template(layout.template_path()),
                PluginActivation::css_extract(),
            ],
            module: ModuleRules {
                rules: default_rules(settings.style),
            },
        };

        tracing::debug!(
            mode = %descriptor.mode,
            entry = %descriptor.entry.display(),
            filename = %descriptor.output.filename,
            rules = descriptor.module.rules.len(),
            "assembled build descriptor"
        );
        descriptor
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// The mode-dependent settings this descriptor was assembled from
    pub fn settings(&self) -> &ModeSettings {
        &self.settings
    }

    pub fn entry(&self) -> &Path {
        &self.entry
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    pub fn dev_server(&self) -> &DevServerConfig {
        &self.dev_server
    }

    pub fn devtool(&self) -> &str {
        self.devtool
    }

    pub fn plugins(&self) -> &[PluginActivation] {
        &self.plugins
    }

    pub fn rules(&self) -> &[TransformRule] {
        &self.module.rules
    }

    /// Look up a rule by name
    pub fn rule(&self, name: &str) -> Option<&TransformRule> {
        self.module.rules.iter().find(|rule| rule.name == name)
    }

    /// First rule whose patterns match `path`
    pub fn rule_for(&self, path: impl AsRef<Path>) -> Result<Option<&TransformRule>> {
        let path = path.as_ref();
        for rule in &self.module.rules {
            if rule.matches(path)? {
                return Ok(Some(rule));
            }
        }
        Ok(None)
    }

    /// Page filename written by the HTML template plugin
    pub fn html_filename(&self) -> Option<&str> {
        self.plugins.iter().find_map(|plugin| match plugin {
            PluginActivation::HtmlTemplate(options) => Some(options.filename.as_str()),
            _ => None,
        })
    }

    /// Stylesheet filename pattern of the CSS extract plugin
    pub fn css_filename(&self) -> Option<&str> {
        self.plugins.iter().find_map(|plugin| match plugin {
            PluginActivation::CssExtract(options) => Some(options.filename.as_str()),
            _ => None,
        })
    }

    /// Whether the plugin list contains `name`
    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.name() == name)
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Pretty-printed JSON, as consumed by the bundler wrapper
    ///
    /// Rule patterns are regex sources. The wrapper builds each rule's
    /// `test` and `exclude` into a `RegExp`, with the `i` flag when
    /// `caseInsensitive` is set, and drops `caseInsensitive` before handing
    /// the rule on; a bare string `test` would be a path-prefix match.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

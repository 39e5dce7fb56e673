//! Mode-dependent settings.
//!
//! The three settings that change with the build mode are decided together
//! here and nowhere else, so they cannot drift apart.

use serde::{Deserialize, Serialize};

use crate::mode::BuildMode;
use crate::naming::OutputNamingPolicy;

/// Loader used as the first style step when styles are extracted.
pub const CSS_EXTRACT_LOADER: &str = "mini-css-extract-plugin/loader";

/// Loader used as the first style step when styles are injected at runtime.
pub const STYLE_INJECT_LOADER: &str = "style-loader";

/// Source map generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMapMode {
    /// Maps evaluated alongside each module; quick to rebuild.
    EvalSourceMap,
    /// Standalone `.map` files.
    SourceMap,
}

impl SourceMapMode {
    /// Value of the bundler's `devtool` option.
    pub fn devtool(self) -> &'static str {
        match self {
            SourceMapMode::EvalSourceMap => "eval-source-map",
            SourceMapMode::SourceMap => "source-map",
        }
    }
}

/// Where compiled styles end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePipeline {
    /// Injected into the page at runtime, supports live style replacement.
    Inject,
    /// Written to a separate stylesheet.
    Extract,
}

impl StylePipeline {
    /// First loader of the style rule.
    pub fn loader(self) -> &'static str {
        match self {
            StylePipeline::Inject => STYLE_INJECT_LOADER,
            StylePipeline::Extract => CSS_EXTRACT_LOADER,
        }
    }
}

/// Everything that varies with [`BuildMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeSettings {
    pub mode: BuildMode,
    pub naming: OutputNamingPolicy,
    pub source_map: SourceMapMode,
    pub style: StylePipeline,
}

/// Resolve the mode-dependent settings.
///
/// # Example
///
/// ```
/// use kiln_config::{resolve, BuildMode, SourceMapMode, StylePipeline};
///
/// let settings = resolve(BuildMode::Development);
/// assert_eq!(settings.source_map, SourceMapMode::EvalSourceMap);
/// assert_eq!(settings.style, StylePipeline::Inject);
/// ```
pub fn resolve(mode: BuildMode) -> ModeSettings {
    let settings = match mode {
        BuildMode::Development => ModeSettings {
            mode,
            naming: OutputNamingPolicy::Stable,
            source_map: SourceMapMode::EvalSourceMap,
            style: StylePipeline::Inject,
        },
        BuildMode::Production => ModeSettings {
            mode,
            naming: OutputNamingPolicy::ContentHashed,
            source_map: SourceMapMode::SourceMap,
            style: StylePipeline::Extract,
        },
    };
    tracing::debug!(?settings, "resolved mode settings");
    settings
}

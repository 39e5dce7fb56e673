use serde::Serialize;
use std::path::PathBuf;

use crate::bundle::helpers::{default_css_filename, default_html_filename};

pub const HTML_PLUGIN: &str = "html-webpack-plugin";
pub const CSS_EXTRACT_PLUGIN: &str = "mini-css-extract-plugin";

/// A plugin the bundler should instantiate, with its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "plugin", content = "options")]
pub enum PluginActivation {
    /// Emits an HTML page from a template with the bundle tags injected.
    #[serde(rename = "html-webpack-plugin")]
    HtmlTemplate(HtmlTemplateOptions),

    /// Collects compiled styles into a standalone stylesheet.
    #[serde(rename = "mini-css-extract-plugin")]
    CssExtract(CssExtractOptions),
}

impl PluginActivation {
    pub fn html_template(template: impl Into<PathBuf>) -> Self {
        PluginActivation::HtmlTemplate(HtmlTemplateOptions {
            template: template.into(),
            filename: default_html_filename(),
        })
    }

    pub fn css_extract() -> Self {
        PluginActivation::CssExtract(CssExtractOptions {
            filename: default_css_filename(),
        })
    }

    /// Package name of the plugin.
    pub fn name(&self) -> &'static str {
        match self {
            PluginActivation::HtmlTemplate(_) => HTML_PLUGIN,
            PluginActivation::CssExtract(_) => CSS_EXTRACT_PLUGIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlTemplateOptions {
    /// Template file the page is generated from
    pub template: PathBuf,

    /// Output filename, relative to the output directory
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssExtractOptions {
    /// Stylesheet filename pattern, relative to the output directory
    pub filename: String,
}

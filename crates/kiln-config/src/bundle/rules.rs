//! File-type transformation rules.

use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;

use crate::bundle::helpers::is_false;
use crate::error::{ConfigError, Result};
use crate::naming::content_hash;
use crate::resolve::StylePipeline;

/// One named transformation step and its options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderStep {
    pub loader: String,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, Value>,
}

impl LoaderStep {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: IndexMap::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }
}

/// How a matched file is emitted when it is copied rather than bundled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssetKind {
    /// Copied to the output directory as a separate file
    #[serde(rename = "asset/resource")]
    Resource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetGenerator {
    /// Output filename template (`[name]`, `[hash]`, `[ext]`)
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetModule {
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub generator: AssetGenerator,
}

impl AssetModule {
    /// Content-addressed resource under `subdir`.
    pub fn resource(subdir: &str) -> Self {
        Self {
            kind: AssetKind::Resource,
            generator: AssetGenerator {
                filename: format!("{subdir}/[name]-[hash][ext]"),
            },
        }
    }

    /// Render the output path for a source file with the given contents.
    ///
    /// ```
    /// use kiln_config::AssetModule;
    ///
    /// let asset = AssetModule::resource("fonts");
    /// let path = asset.render("src/fonts/Inter.woff2", b"");
    /// assert_eq!(path, "fonts/Inter-e3b0c44298fc1c149afb.woff2");
    /// ```
    pub fn render(&self, path: impl AsRef<Path>, contents: &[u8]) -> String {
        let path = path.as_ref();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        self.generator
            .filename
            .replace("[name]", &stem)
            .replace("[hash]", &content_hash(contents))
            .replace("[ext]", &ext)
    }
}

/// Associates a file matcher with an ordered list of steps.
///
/// Steps run in declaration order; each step's output feeds the next.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformRule {
    /// Lookup key within the rule set; not part of the bundler's schema
    #[serde(skip)]
    pub name: String,

    /// Regex source matched against the resource path
    pub test: String,

    #[serde(skip_serializing_if = "is_false")]
    pub case_insensitive: bool,

    /// Regex source; matching paths are skipped even when `test` matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    #[serde(rename = "use", skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<LoaderStep>,

    #[serde(flatten)]
    pub asset: Option<AssetModule>,
}

impl TransformRule {
    fn new(name: &str, test: &str) -> Self {
        Self {
            name: name.to_string(),
            test: test.to_string(),
            case_insensitive: false,
            exclude: None,
            steps: Vec::new(),
            asset: None,
        }
    }

    fn ignore_case(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    fn exclude(mut self, pattern: &str) -> Self {
        self.exclude = Some(pattern.to_string());
        self
    }

    fn step(mut self, step: LoaderStep) -> Self {
        self.steps.push(step);
        self
    }

    fn asset(mut self, asset: AssetModule) -> Self {
        self.asset = Some(asset);
        self
    }

    /// Compile the rule's patterns.
    pub fn compile(&self) -> Result<RuleMatcher> {
        let invalid = |source| ConfigError::InvalidPattern {
            rule: self.name.clone(),
            source,
        };

        let test = RegexBuilder::new(&self.test)
            .case_insensitive(self.case_insensitive)
            .build()
            .map_err(invalid)?;
        let exclude = self
            .exclude
            .as_deref()
            .map(Regex::new)
            .transpose()
            .map_err(invalid)?;

        Ok(RuleMatcher { test, exclude })
    }

    /// Whether this rule applies to `path`.
    pub fn matches(&self, path: impl AsRef<Path>) -> Result<bool> {
        Ok(self.compile()?.matches(path))
    }
}

/// Compiled form of a [`TransformRule`]'s patterns.
#[derive(Debug, Clone)]
pub struct RuleMatcher {
    test: Regex,
    exclude: Option<Regex>,
}

impl RuleMatcher {
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref().to_string_lossy();
        if !self.test.is_match(&path) {
            return false;
        }
        !self.exclude.as_ref().is_some_and(|re| re.is_match(&path))
    }
}

/// The fixed rule set. Only the first style step depends on the mode.
pub fn default_rules(style: StylePipeline) -> Vec<TransformRule> {
    vec![
        // Live reload of the template needs it to go through a loader
        TransformRule::new("html", r"\.html$")
            .ignore_case()
            .step(LoaderStep::new("html-loader")),
        TransformRule::new("styles", r"\.s[ac]ss$")
            .ignore_case()
            .step(LoaderStep::new(style.loader()))
            .step(LoaderStep::new("css-loader").with_option("sourceMap", json!(true)))
            .step(LoaderStep::new("sass-loader").with_option("sourceMap", json!(true))),
        TransformRule::new("scripts", r"\.(?:js|mjs|cjs)$")
            .exclude("node_modules")
            .step(LoaderStep::new("babel-loader").with_option(
                "presets",
                json!([["@babel/preset-env", { "targets": "defaults" }]]),
            )),
        TransformRule::new("images", r"\.(png|jpg|jpeg|gif|webp)$")
            .ignore_case()
            .asset(AssetModule::resource("images")),
        TransformRule::new("svg", r"\.svg$")
            .ignore_case()
            .step(LoaderStep::new("svgo-loader"))
            .asset(AssetModule::resource("svg")),
        TransformRule::new("fonts", r"\.(woff|woff2|eot|ttf|otf)$")
            .ignore_case()
            .asset(AssetModule::resource("fonts")),
    ]
}

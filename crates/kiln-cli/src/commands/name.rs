//! Name command implementation.
//!
//! Shows what the bundler will emit for a source file under the assembled
//! descriptor.

use std::fmt;
use std::fs;
use std::path::Path;

use kiln_config::{BuildDescriptor, BuildMode, StylePipeline, TransformRule, ENTRY_CHUNK};

use crate::cli::NameArgs;
use crate::commands::utils;
use crate::error::{CliError, Result, ResultExt};

/// What ends up in the output directory for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputName {
    /// A file (or filename pattern) relative to the output directory
    File(String),

    /// No file of its own; the content ships inside the entry chunk
    Inlined,
}

impl fmt::Display for OutputName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputName::File(name) => f.write_str(name),
            OutputName::Inlined => write!(f, "(no file, inlined into the `{ENTRY_CHUNK}` chunk)"),
        }
    }
}

/// Execute the name command.
pub fn execute(args: NameArgs, env_mode: BuildMode) -> Result<()> {
    let descriptor = utils::assemble(&args.project, env_mode)?;
    let root = utils::project_root(&args.project)?;
    let path = root.join(&args.file);

    let contents = fs::read(&path).with_path(&path)?;
    let rule = descriptor
        .rule_for(&path)?
        .ok_or_else(|| CliError::Unmatched(args.file.clone()))?;

    println!("{}", output_name(&descriptor, rule, &path, &contents));
    Ok(())
}

/// Output for `path` under `rule`.
///
/// Asset rules render their own template from the file contents. The page
/// comes from the HTML plugin, and extracted styles from the CSS plugin.
/// Scripts and styles belong to the entry chunk, whose `[contenthash]` covers
/// the whole chunk and is left unexpanded.
pub fn output_name(
    descriptor: &BuildDescriptor,
    rule: &TransformRule,
    path: &Path,
    contents: &[u8],
) -> OutputName {
    if let Some(asset) = &rule.asset {
        return OutputName::File(asset.render(path, contents));
    }

    let chunk_file = |pattern: &str| OutputName::File(pattern.replace("[name]", ENTRY_CHUNK));

    match rule.name.as_str() {
        "html" => descriptor
            .html_filename()
            .map_or(OutputName::Inlined, |name| OutputName::File(name.to_string())),
        "styles" => match descriptor.settings().style {
            StylePipeline::Inject => OutputName::Inlined,
            StylePipeline::Extract => descriptor
                .css_filename()
                .map_or(OutputName::Inlined, chunk_file),
        },
        _ => chunk_file(&descriptor.output().filename),
    }
}

//! Output file naming.
//!
//! Patterns use the bundler's placeholder syntax (`[name]`, `[contenthash]`,
//! `[hash]`, `[ext]`). The helpers here also render concrete filenames so the
//! naming contract can be checked without running a bundler.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Number of hex digits kept from a content digest.
pub const HASH_LENGTH: usize = 20;

/// How entry chunks are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputNamingPolicy {
    /// `[name].<ext>`
    Stable,
    /// `[name].[contenthash].<ext>`
    ContentHashed,
}

impl OutputNamingPolicy {
    /// Filename pattern for files with extension `ext`.
    ///
    /// ```
    /// use kiln_config::OutputNamingPolicy;
    ///
    /// assert_eq!(OutputNamingPolicy::Stable.pattern("js"), "[name].js");
    /// assert_eq!(
    ///     OutputNamingPolicy::ContentHashed.pattern("js"),
    ///     "[name].[contenthash].js"
    /// );
    /// ```
    pub fn pattern(self, ext: &str) -> String {
        match self {
            OutputNamingPolicy::Stable => format!("[name].{ext}"),
            OutputNamingPolicy::ContentHashed => format!("[name].[contenthash].{ext}"),
        }
    }

    /// Concrete filename for an asset called `name` with the given contents.
    pub fn file_name(self, name: &str, ext: &str, contents: &[u8]) -> String {
        match self {
            OutputNamingPolicy::Stable => format!("{name}.{ext}"),
            OutputNamingPolicy::ContentHashed => {
                format!("{name}.{}.{ext}", content_hash(contents))
            }
        }
    }
}

/// Hex digest of `contents`, truncated to [`HASH_LENGTH`] characters.
pub fn content_hash(contents: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    let mut hex = format!("{:x}", hasher.finalize());
    hex.truncate(HASH_LENGTH);
    hex
}

use std::path::PathBuf;

// Static declarations
pub(crate) fn default_entry() -> PathBuf {
    PathBuf::from("src/index.js")
}

pub(crate) fn default_template() -> PathBuf {
    PathBuf::from("src/index.html")
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

pub(crate) fn default_html_filename() -> String {
    "index.html".to_string()
}

/// The extraction plugin's own default; extracted stylesheets are not hashed.
pub(crate) fn default_css_filename() -> String {
    "[name].css".to_string()
}

pub(crate) fn default_host() -> String {
    "localhost".to_string()
}

pub(crate) fn default_port() -> u16 {
    9999
}

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

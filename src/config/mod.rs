//! Configuration for the `static-extract` command line tool.
//!
//! Settings come from an optional TOML file, `static-extract.toml` in the
//! working directory unless `--config` names another one. Every key is
//! optional:
//!
//! ```toml
//! templates = "templates/**/*"   # Tera glob of templates to load
//! data = "site.json"             # JSON or TOML object passed to every template
//! output_dir = "public/static"   # where extracted .css/.js files go
//! url_prefix = "/static"         # prepended to "/<stem>.<ext>" in tags
//! pages_dir = "public"           # where rendered pages go
//! pages = ["index.html"]         # templates to render after extraction
//! ```
//!
//! Relative paths are resolved against the working directory. Command line
//! flags take precedence over the file.

mod parser;

pub use parser::parse_config;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_TEMPLATES_GLOB};
use crate::core::StaticExtractError;

/// Settings for one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Tera glob of templates to load.
    pub templates: String,
    /// Data file handed to every template. No file means an empty context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,
    /// Directory receiving the extracted files.
    pub output_dir: PathBuf,
    /// URL prefix of the extracted files as served.
    pub url_prefix: String,
    /// Directory receiving rendered pages.
    pub pages_dir: PathBuf,
    /// Templates rendered to `pages_dir` after extraction.
    pub pages: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates: DEFAULT_TEMPLATES_GLOB.to_string(),
            data: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            url_prefix: String::new(),
            pages_dir: PathBuf::from("."),
            pages: Vec::new(),
        }
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// With `explicit` set, that file must exist. Otherwise
    /// `static-extract.toml` in the working directory is read when present,
    /// and the defaults are used when it is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(StaticExtractError::ConfigNotFound {
                        path: path.display().to_string(),
                    }
                    .into());
                }
                tracing::debug!("Loading config from {}", path.display());
                parse_config(path)
            }
            None => Self::load_default(Path::new(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Read `path` when it exists, otherwise return the defaults.
    pub fn load_default(path: &Path) -> Result<Self> {
        if path.is_file() {
            tracing::debug!("Loading config from {}", path.display());
            parse_config(path)
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}

//! Command-line interface for static-extract.
//!
//! # Available Commands
//!
//! - `build` - extract static CSS/JS templates to files and render pages
//! - `plan` - list static templates and where their tags will go, writing nothing
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - debug logging
//! - `--quiet` / `-q` - errors only, no summary
//! - `--config` / `-c` - config file instead of `./static-extract.toml`
//!
//! `RUST_LOG` overrides the log level chosen by `--verbose`/`--quiet`.
//!
//! ```bash
//! static-extract plan
//! static-extract build --url-prefix /static --page index.html
//! static-extract --config site.toml --verbose build
//! ```

mod build;
pub mod common;
mod plan;


use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use build::{BuildCommand, BuildReport, PageReport};
pub use plan::{Plan, PlanCommand, PlannedAsset};

use crate::config::Config;

/// Settings derived from the global flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Suppress the command summary.
    pub quiet: bool,
    /// Explicit config file.
    pub config_path: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            quiet: false,
            config_path: None,
        }
    }
}

/// Extract static CSS/JS templates into files and inject their tags.
#[derive(Parser, Debug)]
#[command(
    name = "static-extract",
    about = "Extract static CSS/JS sub-templates to files and inject their tags",
    version,
    long_about = "Renders templates named static-css-<stem> and static-js-<stem> to \
                  <output_dir>/<stem>.css and <output_dir>/<stem>.js, and rewrites the \
                  templates so pages reference those files instead of inlining them."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors and print no summary
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the config file (default: ./static-extract.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract static assets and render pages.
    ///
    /// See [`BuildCommand`] for options.
    Build(BuildCommand),

    /// Show static templates and where their tags will go, writing nothing.
    ///
    /// See [`PlanCommand`] for options.
    Plan(PlanCommand),
}

impl Cli {
    /// Run the parsed command.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config)
    }

    /// Translate the global flags into a [`CliConfig`].
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        };

        CliConfig {
            log_level: log_level.to_string(),
            quiet: self.quiet,
            config_path: self.config.clone(),
        }
    }

    /// Run the parsed command with explicit settings.
    pub fn execute_with_config(self, cli_config: CliConfig) -> Result<()> {
        common::init_logging(&cli_config.log_level);

        let config = Config::load(cli_config.config_path.as_deref())?;
        tracing::debug!("Using config: {:?}", config);

        match self.command {
            Commands::Build(cmd) => cmd.execute(config, cli_config.quiet),
            Commands::Plan(cmd) => cmd.execute(config, cli_config.quiet),
        }
    }
}

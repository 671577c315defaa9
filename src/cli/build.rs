//! `static-extract build`: extract static assets and render pages.
//!
//! Loads the templates and the data file, runs the extractor, then renders
//! every requested page with the rewritten templates. Pages are written with
//! the same unchanged-content check as the assets, so a rebuild with no
//! changes touches nothing on disk.
//!
//! ```bash
//! static-extract build
//! static-extract build --templates "site/**/*" --output-dir public/static \
//!     --url-prefix /static --pages-dir public --page index.html --page about.html
//! ```

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::common::{load_data, load_templates};
use crate::config::Config;
use crate::core::StaticExtractError;
use crate::extract::{AssetReport, Extractor, Placement};
use crate::utils::fs::{WriteOutcome, write_if_changed};

/// Extract static assets and render pages.
#[derive(Args, Debug, Default)]
pub struct BuildCommand {
    /// Tera glob of templates to load
    #[arg(long, value_name = "GLOB")]
    pub templates: Option<String>,

    /// JSON or TOML file handed to every template
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Directory receiving the extracted .css and .js files
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Prefix of the extracted files' URLs, e.g. /static
    #[arg(long, value_name = "PREFIX")]
    pub url_prefix: Option<String>,

    /// Template to render after extraction (repeatable)
    #[arg(long = "page", value_name = "NAME")]
    pub pages: Vec<String>,

    /// Directory receiving rendered pages
    #[arg(long, value_name = "DIR")]
    pub pages_dir: Option<PathBuf>,
}

/// A page written by [`BuildCommand::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    pub name: String,
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

/// Everything [`BuildCommand::run`] wrote.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub assets: Vec<AssetReport>,
    pub pages: Vec<PageReport>,
}

impl BuildCommand {
    /// Layer the command line flags over `config`.
    #[must_use]
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(templates) = &self.templates {
            config.templates.clone_from(templates);
        }
        if let Some(data) = &self.data {
            config.data = Some(data.clone());
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir.clone_from(output_dir);
        }
        if let Some(url_prefix) = &self.url_prefix {
            config.url_prefix.clone_from(url_prefix);
        }
        if let Some(pages_dir) = &self.pages_dir {
            config.pages_dir.clone_from(pages_dir);
        }
        if !self.pages.is_empty() {
            config.pages.clone_from(&self.pages);
        }
        config
    }

    pub fn execute(self, config: Config, quiet: bool) -> Result<()> {
        let report = self.run(config)?;
        if !quiet {
            print_report(&report);
        }
        Ok(())
    }

    /// Run the build without printing anything.
    pub fn run(&self, config: Config) -> Result<BuildReport> {
        let config = self.apply(config);

        let tera = load_templates(&config.templates)?;
        let data = load_data(config.data.as_deref())?;

        let extraction = Extractor::new(&config.output_dir)
            .with_url_prefix(&config.url_prefix)
            .run(&tera, &data)?;

        let mut pages = Vec::with_capacity(config.pages.len());
        for name in &config.pages {
            if !extraction.forest.get_template_names().any(|loaded| loaded == name) {
                return Err(StaticExtractError::PageNotFound {
                    name: name.clone(),
                }
                .into());
            }

            let html = extraction
                .forest
                .render(name, &data)
                .with_context(|| format!("Failed to render page '{name}'"))?;
            let path = config.pages_dir.join(name);
            let outcome = write_if_changed(&path, html.as_bytes())?;
            tracing::info!("{} {} ({})", outcome, path.display(), name);

            pages.push(PageReport {
                name: name.clone(),
                path,
                outcome,
            });
        }

        Ok(BuildReport {
            assets: extraction.assets,
            pages,
        })
    }
}

fn outcome_label(outcome: WriteOutcome) -> colored::ColoredString {
    match outcome {
        WriteOutcome::Created => outcome.to_string().green(),
        WriteOutcome::Updated => outcome.to_string().yellow(),
        WriteOutcome::Unchanged => outcome.to_string().dimmed(),
    }
}

fn print_report(report: &BuildReport) {
    for asset in &report.assets {
        let placement = match asset.placement {
            Placement::Dropped => asset.placement.to_string().red(),
            _ => asset.placement.to_string().normal(),
        };
        println!(
            "{} {} -> {} ({}, {})",
            asset.kind.to_string().cyan(),
            asset.stem.bold(),
            asset.path.display(),
            outcome_label(asset.outcome),
            placement
        );
    }

    for page in &report.pages {
        println!(
            "{} {} -> {} ({})",
            "page".cyan(),
            page.name.bold(),
            page.path.display(),
            outcome_label(page.outcome)
        );
    }

    let written = report.assets.iter().filter(|a| a.outcome.wrote()).count()
        + report.pages.iter().filter(|p| p.outcome.wrote()).count();
    println!(
        "{}: {} asset(s), {} page(s), {} file(s) written",
        "Done".green().bold(),
        report.assets.len(),
        report.pages.len(),
        written
    );
}

//! Static asset extraction.
//!
//! Templates named `static-css-<stem>` or `static-js-<stem>` hold raw
//! stylesheet or script text. Extraction renders each of them once, writes the
//! output to `<output_dir>/<stem>.css` or `<output_dir>/<stem>.js` and returns
//! a rewritten copy of the forest in which:
//!
//! - a static template that is explicitly included somewhere renders its
//!   reference tag at every include site;
//! - every other static template renders nothing, and its tag is spliced in
//!   front of the first `</head>` found in the forest (stylesheets first, then
//!   scripts).
//!
//! The caller's forest is never modified. Internally it is cloned twice: one
//! clone is executed to obtain content, the other is rewritten and returned.
//!
//! # Pipeline
//!
//! 1. [`classify`] decides which trees are static and splits off their stem
//! 2. [`render_assets`] executes every static tree against the caller's data
//! 3. [`placed_assets`] finds static trees invoked explicitly anywhere
//! 4. [`rewrite`] writes the files and redefines the static trees
//! 5. [`inject`] splices the deferred tags before the closing head marker
//!
//! # Example
//!
//! ```rust,no_run
//! use static_extract::extract::Extractor;
//! use tera::{Context, Tera};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut tera = Tera::default();
//! tera.add_raw_templates(vec![
//!     ("static-css-main", "body { color: red; }"),
//!     ("page", "<html><head><title>T</title></head><body></body></html>"),
//! ])?;
//!
//! let extraction = Extractor::new("public/static")
//!     .with_url_prefix("/static")
//!     .run(&tera, &Context::new())?;
//!
//! let page = extraction.forest.render("page", &Context::new())?;
//! assert!(page.contains(r#"<link rel="stylesheet" href="/static/main.css"></head>"#));
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod error;
pub mod inject;
pub mod placement;
pub mod render;
pub mod report;
pub mod rewrite;

use std::path::{Path, PathBuf};

use crate::forest::TemplateForest;

pub use classify::{AssetKind, Classified, classify, is_static};
pub use error::ExtractError;
pub use inject::{head_location, inject_before_head};
pub use placement::placed_assets;
pub use render::{StaticAsset, render_assets};
pub use report::{AssetReport, Placement};
pub use rewrite::{Rewrite, rewrite_forest};

/// Extraction options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extractor {
    output_dir: PathBuf,
    url_prefix: String,
}

/// Result of a successful [`Extractor::run`].
#[derive(Debug)]
pub struct Extraction<F> {
    /// The rewritten forest.
    pub forest: F,
    /// One report per static template, in enumeration order.
    pub assets: Vec<AssetReport>,
}

impl<F> Extraction<F> {
    /// Reports of assets whose tag appears nowhere in [`forest`](Self::forest).
    pub fn dropped(&self) -> impl Iterator<Item = &AssetReport> {
        self.assets.iter().filter(|asset| asset.placement == Placement::Dropped)
    }
}

impl Extractor {
    /// Extract into `output_dir` with an empty URL prefix.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            url_prefix: String::new(),
        }
    }

    /// Prefix prepended verbatim to `/<stem>.<ext>` in every reference tag.
    #[must_use]
    pub fn with_url_prefix(mut self, url_prefix: impl Into<String>) -> Self {
        self.url_prefix = url_prefix.into();
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// Extract the static templates of `forest` and return the rewritten copy.
    ///
    /// `forest` is only read. `data` is passed to every static template when
    /// it is rendered. The output directory is created when the first asset is
    /// written; a forest without static templates writes nothing.
    ///
    /// Files whose content is unchanged are left untouched so their
    /// modification time survives repeated runs.
    ///
    /// # Errors
    ///
    /// Every failure aborts the call and no forest is returned. Rendering
    /// completes before any file is written, so [`ExtractError::Clone`] and
    /// [`ExtractError::Render`] leave the disk untouched. Files written before
    /// an [`ExtractError::Write`] or [`ExtractError::Redefine`] stay on disk.
    pub fn run<F>(&self, forest: &F, data: &F::Data) -> Result<Extraction<F>, ExtractError<F::Error>>
    where
        F: TemplateForest,
    {
        let execution = forest.try_clone().map_err(ExtractError::Clone)?;
        let assets = render_assets(&execution, data, &self.url_prefix)?;
        drop(execution);

        let mut result = forest.try_clone().map_err(ExtractError::Clone)?;
        let placed = placed_assets(&result);

        let Rewrite {
            deferred_tags,
            mut reports,
        } = rewrite_forest(&mut result, &assets, &placed, &self.output_dir)?;

        let injected =
            inject_before_head(&mut result, &deferred_tags).map_err(ExtractError::Redefine)?;
        if !deferred_tags.is_empty() && injected.is_none() {
            let mut dropped = Vec::new();
            for report in reports.iter_mut().filter(|r| r.placement == Placement::Injected) {
                report.placement = report.placement.without_head();
                dropped.push(report.name.as_str());
            }
            tracing::warn!(
                "No closing head marker found; tags for {} are not emitted",
                dropped.join(", ")
            );
        }

        tracing::debug!(
            "Extracted {} static asset(s) into {}",
            reports.len(),
            self.output_dir.display()
        );

        Ok(Extraction {
            forest: result,
            assets: reports,
        })
    }
}

/// Extract the static templates of `forest` into `output_dir` and return the
/// rewritten copy.
///
/// Shorthand for [`Extractor::run`] when the per-asset reports are not
/// needed.
///
/// # Errors
///
/// See [`Extractor::run`].
pub fn parse<F>(
    forest: &F,
    data: &F::Data,
    output_dir: impl AsRef<Path>,
    url_prefix: &str,
) -> Result<F, ExtractError<F::Error>>
where
    F: TemplateForest,
{
    Extractor::new(output_dir.as_ref())
        .with_url_prefix(url_prefix)
        .run(forest, data)
        .map(|extraction| extraction.forest)
}

//! Forest rewriter.
//!
//! Writes each rendered asset to disk and replaces every static declaration
//! in the result forest with either its reference tag (explicitly placed) or
//! nothing (tag deferred to auto-injection). The original body of a static
//! declaration never survives: raw CSS/JS must not reach rendered output.

use std::collections::BTreeSet;
use std::path::Path;

use crate::forest::TemplateForest;
use crate::utils::fs::write_if_changed;

use super::classify::AssetKind;
use super::error::ExtractError;
use super::render::StaticAsset;
use super::report::{AssetReport, Placement};

/// Outcome of [`rewrite_forest`].
#[derive(Debug)]
pub struct Rewrite {
    /// Tags of assets without an explicit placement, CSS first then JS,
    /// concatenated. Empty when every asset is placed.
    pub deferred_tags: String,
    /// One report per asset, in asset order. Deferred assets are reported as
    /// [`Placement::Injected`] until injection says otherwise.
    pub reports: Vec<AssetReport>,
}

/// Write every asset into `output_dir` and redefine its template in `forest`.
///
/// Assets are processed in the order given. Each file is written before the
/// next asset is looked at, so a write failure leaves earlier files on disk.
/// The redefinitions are applied in one batch once all files are written.
///
/// # Errors
///
/// - [`ExtractError::Write`] when the directory or a file cannot be written
/// - [`ExtractError::Redefine`] when the engine rejects the redefinitions
pub fn rewrite_forest<F>(
    forest: &mut F,
    assets: &[StaticAsset],
    placed: &BTreeSet<String>,
    output_dir: &Path,
) -> Result<Rewrite, ExtractError<F::Error>>
where
    F: TemplateForest,
{
    let mut redefinitions = Vec::with_capacity(assets.len());
    let mut deferred_css = Vec::new();
    let mut deferred_js = Vec::new();
    let mut reports = Vec::with_capacity(assets.len());

    for asset in assets {
        let path = output_dir.join(asset.file_name());
        let outcome =
            write_if_changed(&path, &asset.content).map_err(|e| ExtractError::Write {
                path: path.clone(),
                source: e.into(),
            })?;
        tracing::info!("{} {} ({})", outcome, path.display(), asset.name);

        let placement = Placement::of(&asset.name, placed);
        if placement == Placement::Explicit {
            redefinitions.push((asset.name.clone(), asset.tag.clone()));
        } else {
            redefinitions.push((asset.name.clone(), String::new()));
            match asset.kind {
                AssetKind::Css => deferred_css.push(asset.tag.as_str()),
                AssetKind::Js => deferred_js.push(asset.tag.as_str()),
            }
        }

        reports.push(AssetReport {
            name: asset.name.clone(),
            kind: asset.kind,
            stem: asset.stem.clone(),
            path,
            tag: asset.tag.clone(),
            placement,
            outcome,
            size: asset.content.len(),
        });
    }

    if !redefinitions.is_empty() {
        tracing::debug!("Redefining {} static template(s)", redefinitions.len());
        forest.redefine(redefinitions).map_err(ExtractError::Redefine)?;
    }

    let mut deferred_tags = deferred_css.concat();
    deferred_tags.push_str(&deferred_js.concat());

    Ok(Rewrite {
        deferred_tags,
        reports,
    })
}

//! Content renderer.
//!
//! Executes every static declaration in a forest once and keeps the raw
//! bytes. The bytes are only ever written to disk; they never reach rendered
//! page output.

use crate::forest::TemplateForest;

use super::classify::{AssetKind, classify};
use super::error::ExtractError;

/// A rendered static declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAsset {
    /// Full template name, e.g. `static-css-main`.
    pub name: String,
    pub kind: AssetKind,
    /// Template name without its prefix, e.g. `main`.
    pub stem: String,
    /// Reference tag pointing at the extracted file.
    pub tag: String,
    /// Exact output of executing the template.
    pub content: Vec<u8>,
}

impl StaticAsset {
    /// File name the asset is extracted to, `stem.ext`.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.kind.file_name(&self.stem)
    }
}

/// Render every classified tree of `forest`, in enumeration order.
///
/// `forest` is the execution clone: engines may refuse edits once a tree has
/// run, so the caller must not rewrite it afterwards.
///
/// # Errors
///
/// The first execution failure aborts rendering and is returned as
/// [`ExtractError::Render`] carrying the engine's error.
pub fn render_assets<F>(
    forest: &F,
    data: &F::Data,
    url_prefix: &str,
) -> Result<Vec<StaticAsset>, ExtractError<F::Error>>
where
    F: TemplateForest,
{
    let mut assets = Vec::new();

    for name in forest.names() {
        let Some(classified) = classify(&name) else {
            continue;
        };

        let content = forest.execute(&name, data).map_err(|source| ExtractError::Render {
            name: name.clone(),
            source,
        })?;

        tracing::debug!(
            "Rendered static {} '{}' ({} bytes)",
            classified.kind,
            name,
            content.len()
        );

        let stem = classified.stem.to_string();
        let tag = classified.kind.tag(url_prefix, &stem);
        assets.push(StaticAsset {
            kind: classified.kind,
            stem,
            tag,
            content,
            name,
        });
    }

    Ok(assets)
}

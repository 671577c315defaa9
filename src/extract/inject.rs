//! Head injector.
//!
//! Splices deferred reference tags into the first text node of the forest
//! that contains the closing head marker, immediately before the marker.

use crate::constants::HEAD_CLOSE_MARKER;
use crate::forest::{NodeView, TemplateForest, edit_first_text, walk};

/// Insert `tags` immediately before the first [`HEAD_CLOSE_MARKER`] found in
/// any text node of `forest`.
///
/// Trees are searched in enumeration order and each tree depth-first, visiting
/// conditional arms in order, loop bodies before their else bodies and the
/// bodies of blocks. Only the first occurrence in the whole forest is edited.
///
/// Returns the name of the edited tree, or `None` when `tags` is empty or no
/// text node contains the marker. In the latter case the forest is unchanged.
///
/// # Errors
///
/// The engine's error when it cannot rebuild its state for the edited tree.
pub fn inject_before_head<F>(forest: &mut F, tags: &str) -> Result<Option<String>, F::Error>
where
    F: TemplateForest,
{
    if tags.is_empty() {
        return Ok(None);
    }

    let mut splice = |text: &mut String| match text.find(HEAD_CLOSE_MARKER) {
        Some(at) => {
            text.insert_str(at, tags);
            true
        }
        None => false,
    };

    for name in forest.names() {
        let Some(nodes) = forest.nodes_mut(&name) else {
            continue;
        };
        if edit_first_text(nodes, &mut splice) {
            forest.refresh(&name)?;
            tracing::debug!("Injected static tags into '{}'", name);
            return Ok(Some(name));
        }
    }

    Ok(None)
}

/// Name of the tree [`inject_before_head`] would edit, without editing it.
pub fn head_location<F>(forest: &F) -> Option<String>
where
    F: TemplateForest,
{
    forest.names().into_iter().find(|name| {
        let Some(nodes) = forest.nodes(name) else {
            return false;
        };
        let mut found = false;
        walk(nodes, &mut |view| {
            if let NodeView::Text(text) = view {
                found |= text.contains(HEAD_CLOSE_MARKER);
            }
        });
        found
    })
}

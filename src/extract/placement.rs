//! Placement analyzer.
//!
//! Finds which static declarations the forest invokes explicitly. An explicit
//! invocation anywhere (top level, inside any conditional arm, inside a loop
//! body or its else body, inside a block, at any depth) decides that the
//! asset's tag is emitted at the invocation site instead of being
//! auto-injected.

use std::collections::BTreeSet;

use crate::forest::{NodeView, TemplateForest, walk};

use super::classify::is_static;

/// Names of static declarations that are the target of at least one
/// invocation node anywhere in `forest`.
///
/// Only set membership matters; traversal order is irrelevant. Invocations
/// of non-static templates are ignored.
pub fn placed_assets<F>(forest: &F) -> BTreeSet<String>
where
    F: TemplateForest,
{
    let mut placed = BTreeSet::new();

    for name in forest.names() {
        let Some(nodes) = forest.nodes(&name) else {
            continue;
        };
        walk(nodes, &mut |view| {
            if let NodeView::Invocation(targets) = view {
                for target in targets.iter().filter(|target| is_static(target)) {
                    placed.insert((*target).to_string());
                }
            }
        });
    }

    if !placed.is_empty() {
        tracing::debug!("Explicitly placed static templates: {:?}", placed);
    }
    placed
}

//! Per-asset results of an extraction run.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use crate::utils::fs::WriteOutcome;

use super::classify::AssetKind;

/// Where an asset's reference tag ended up in the returned forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The forest invokes the asset explicitly; the tag renders at each call site.
    Explicit,
    /// The tag was spliced in front of the first closing head marker.
    Injected,
    /// No closing head marker exists; the tag appears nowhere.
    Dropped,
}

impl Placement {
    /// Placement of the static template `name` given the explicitly placed
    /// set, assuming a closing head marker exists.
    #[must_use]
    pub fn of(name: &str, placed: &BTreeSet<String>) -> Self {
        if placed.contains(name) {
            Placement::Explicit
        } else {
            Placement::Injected
        }
    }

    /// The same placement in a forest without a closing head marker.
    #[must_use]
    pub const fn without_head(self) -> Self {
        match self {
            Placement::Injected => Placement::Dropped,
            other => other,
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Placement::Explicit => "explicit",
            Placement::Injected => "injected",
            Placement::Dropped => "dropped",
        })
    }
}

/// Summary of one extracted asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReport {
    pub name: String,
    pub kind: AssetKind,
    pub stem: String,
    /// File the content was written to.
    pub path: PathBuf,
    pub tag: String,
    pub placement: Placement,
    pub outcome: WriteOutcome,
    /// Content length in bytes.
    pub size: usize,
}

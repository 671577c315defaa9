//! File system helpers for writing extracted assets and rendered pages.
//!
//! Writes go through [`atomic_write`] so a reader (for example a static file
//! server watching the output directory) never observes a half-written file,
//! and through [`write_if_changed`] so unchanged assets keep their modification
//! time and downstream caches stay valid.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What [`write_if_changed`] did with the destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// No file existed; it was written.
    Created,
    /// A file with different content existed; it was replaced.
    Updated,
    /// A file with identical content existed; it was left untouched.
    Unchanged,
}

impl WriteOutcome {
    /// Whether the file on disk was (re)written.
    #[must_use]
    pub const fn wrote(self) -> bool {
        !matches!(self, WriteOutcome::Unchanged)
    }
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WriteOutcome::Created => "created",
            WriteOutcome::Updated => "updated",
            WriteOutcome::Unchanged => "unchanged",
        })
    }
}

/// Ensures a directory exists, creating it and all parent directories if necessary.
///
/// # Errors
///
/// Returns an error if the path exists but is not a directory, or if creation
/// fails.
///
/// # Examples
///
/// ```rust,no_run
/// use static_extract::utils::fs::ensure_dir;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// ensure_dir(Path::new("public/static/vendor"))?;
/// # Ok(())
/// # }
/// ```
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).with_context(|| {
            format!(
                "Failed to create directory: {}\n\nCheck directory permissions and path validity",
                path.display()
            )
        })?;
    } else if !path.is_dir() {
        return Err(anyhow::anyhow!("Path exists but is not a directory: {}", path.display()));
    }
    Ok(())
}

/// Ensures that the parent directory of a file path exists.
///
/// Paths without a parent component (bare file names) need nothing created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent),
        _ => Ok(()),
    }
}

/// Sibling path used as the staging file for [`atomic_write`].
///
/// `dir/main.css` stages in `dir/.main.css.tmp`, so assets that share a stem
/// but differ in extension never share a staging file.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// 1. Write the content to a hidden sibling staging file
/// 2. Sync the staging file to disk
/// 3. Rename it over the target path
///
/// Parent directories are created as needed.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    ensure_parent_dir(path)?;

    let temp_path = staging_path(path);
    {
        let mut file = fs::File::create(&temp_path).with_context(|| {
            format!(
                "Failed to create temp file: {}\n\nCheck file permissions and that directory exists",
                temp_path.display()
            )
        })?;

        file.write_all(content)
            .with_context(|| format!("Failed to write to temp file: {}", temp_path.display()))?;

        file.sync_all().with_context(|| "Failed to sync file to disk")?;
    }

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}

/// Writes `content` to `path` unless the file already holds exactly those bytes.
///
/// When the existing file is byte-for-byte identical it is not touched, so its
/// modification time is preserved. Otherwise the content is written with
/// [`atomic_write`], replacing any existing file. The parent directory is
/// created first, even when nothing ends up being written.
///
/// An existing file that cannot be read is treated as different and replaced.
///
/// # Examples
///
/// ```rust,no_run
/// use static_extract::utils::fs::{WriteOutcome, write_if_changed};
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let path = Path::new("public/static/main.css");
/// write_if_changed(path, b"body{}")?;
/// assert_eq!(write_if_changed(path, b"body{}")?, WriteOutcome::Unchanged);
/// # Ok(())
/// # }
/// ```
pub fn write_if_changed(path: &Path, content: &[u8]) -> Result<WriteOutcome> {
    ensure_parent_dir(path)?;

    let outcome = match fs::read(path) {
        Ok(existing) if existing == content => {
            tracing::debug!("Unchanged: {}", path.display());
            return Ok(WriteOutcome::Unchanged);
        }
        Ok(_) => WriteOutcome::Updated,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => WriteOutcome::Created,
        Err(e) => {
            tracing::debug!("Could not read existing {}: {}", path.display(), e);
            WriteOutcome::Updated
        }
    };

    atomic_write(path, content)?;
    tracing::debug!("{}: {} ({} bytes)", outcome, path.display(), content.len());
    Ok(outcome)
}

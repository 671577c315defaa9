//! Generic TOML parsing with file path context.

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::StaticExtractError;

/// Parse a TOML file into `T`.
///
/// # Errors
///
/// - the file cannot be read (the I/O error is kept as the cause)
/// - the content is not valid TOML for `T`, reported as
///   [`StaticExtractError::ConfigParseError`] naming the file
///
/// ```rust,no_run
/// use static_extract::config::parse_config;
/// use serde::Deserialize;
/// use std::path::Path;
///
/// #[derive(Deserialize)]
/// struct Site {
///     title: String,
/// }
///
/// # fn example() -> anyhow::Result<()> {
/// let site: Site = parse_config(Path::new("site.toml"))?;
/// println!("{}", site.title);
/// # Ok(())
/// # }
/// ```
pub fn parse_config<T>(path: &Path) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: T = toml::from_str(&content).map_err(|e| StaticExtractError::ConfigParseError {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(config)
}

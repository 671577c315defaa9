//! Loading shared by the `build` and `plan` commands.

use anyhow::{Context as _, Result};
use std::path::Path;
use tera::{Context, Tera};
use tracing_subscriber::EnvFilter;

use crate::core::{StaticExtractError, source_chain};
use crate::extract::classify;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` applies. Logs go to stderr so
/// they never mix with the command summary on stdout. Calling this twice is
/// harmless.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Name a template file is registered under.
///
/// Static template files may carry their kind's extension on disk, so
/// `static-css-main.css` is registered as `static-css-main` and extracts to
/// `main.css`. Every other template keeps Tera's name.
pub fn registered_name(name: &str) -> &str {
    let Some(classified) = classify(name) else {
        return name;
    };
    let stripped = name
        .strip_suffix(classified.kind.extension())
        .and_then(|rest| rest.strip_suffix('.'));
    match stripped {
        Some(stripped) if classify(stripped).is_some() => stripped,
        _ => name,
    }
}

/// Load every template matching the Tera glob `pattern`.
pub fn load_templates(pattern: &str) -> Result<Tera> {
    let template_error = |e: tera::Error| {
        let chain = source_chain(&e);
        StaticExtractError::TemplateLoadError {
            pattern: pattern.to_string(),
            reason: if chain.is_empty() {
                e.to_string()
            } else {
                format!("{e}: {chain}")
            },
        }
    };

    let loaded = Tera::new(pattern).map_err(template_error)?;

    let mut files = Vec::new();
    let mut renamed = false;
    for name in loaded.get_template_names() {
        let Some(path) = loaded.templates.get(name).and_then(|t| t.path.clone()) else {
            continue;
        };
        let registered = registered_name(name);
        renamed |= registered != name;
        files.push((path, Some(registered.to_string())));
    }

    if !renamed {
        tracing::debug!("Loaded {} template(s) from '{}'", files.len(), pattern);
        return Ok(loaded);
    }

    let mut tera = Tera::default();
    tera.add_template_files(files).map_err(template_error)?;
    tracing::debug!("Loaded {} template(s) from '{}'", tera.get_template_names().count(), pattern);
    Ok(tera)
}

/// Load the data handed to every template.
///
/// `.json` and `.toml` files are accepted; the top level must be an object.
/// No file means an empty context.
pub fn load_data(path: Option<&Path>) -> Result<Context> {
    let Some(path) = path else {
        return Ok(Context::new());
    };

    let data_error = |reason: String| StaticExtractError::DataFileError {
        file: path.display().to_string(),
        reason,
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file: {}", path.display()))?;

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let value = match extension {
        "json" => serde_json::from_str::<serde_json::Value>(&content)
            .map_err(|e| data_error(e.to_string()))?,
        "toml" => {
            let value = toml::from_str::<toml::Table>(&content).map_err(|e| data_error(e.to_string()))?;
            serde_json::to_value(value).map_err(|e| data_error(e.to_string()))?
        }
        other => {
            return Err(data_error(format!(
                "unsupported extension '{other}', expected 'json' or 'toml'"
            ))
            .into());
        }
    };

    if !value.is_object() {
        return Err(data_error("top level must be an object".to_string()).into());
    }

    Context::from_value(value).map_err(|e| data_error(e.to_string()).into())
}

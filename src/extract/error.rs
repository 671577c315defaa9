//! Errors raised while extracting static assets.
//!
//! Every failure is fatal to the extraction call. Engine errors are carried
//! unchanged in the `E` parameter so callers can inspect them with the
//! engine's own API.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of an extraction call.
///
/// | Variant | Files written before the failure |
/// |---------|----------------------------------|
/// | [`Clone`](Self::Clone) | none |
/// | [`Render`](Self::Render) | none |
/// | [`Write`](Self::Write) | assets processed earlier in the same call |
/// | [`Redefine`](Self::Redefine) | all assets |
///
/// There is no rollback: files written before the failure stay on disk. A
/// rerun after fixing the cause rewrites or keeps them as usual.
#[derive(Error, Debug)]
pub enum ExtractError<E>
where
    E: std::error::Error + 'static,
{
    /// The forest could not be cloned.
    #[error("Failed to clone template forest")]
    Clone(#[source] E),

    /// Executing a static declaration failed.
    #[error("Failed to render static template '{name}'")]
    Render {
        /// Name of the template that failed
        name: String,
        /// The engine's execution error
        #[source]
        source: E,
    },

    /// Creating the output directory or writing an asset file failed.
    #[error("Failed to write static asset: {}", path.display())]
    Write {
        /// Destination that could not be written
        path: PathBuf,
        /// Underlying I/O failure with context
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The engine rejected the synthesized redefinitions, or could not
    /// rebuild a tree after the deferred tags were spliced into it.
    #[error("Failed to redefine static templates")]
    Redefine(#[source] E),
}

impl<E> ExtractError<E>
where
    E: std::error::Error + 'static,
{
    /// Name of the template involved, when the failure is tied to one.
    #[must_use]
    pub fn template_name(&self) -> Option<&str> {
        match self {
            ExtractError::Render {
                name,
                ..
            } => Some(name),
            _ => None,
        }
    }

    /// The engine error, for failures that originate in the engine.
    #[must_use]
    pub fn engine_error(&self) -> Option<&E> {
        match self {
            ExtractError::Clone(source)
            | ExtractError::Render {
                source,
                ..
            }
            | ExtractError::Redefine(source) => Some(source),
            ExtractError::Write {
                ..
            } => None,
        }
    }
}

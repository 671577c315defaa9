//! Error handling for the static-extract command line tool.
//!
//! The library core reports failures through the generic
//! [`ExtractError`](crate::extract::ExtractError). Everything around it (config
//! loading, template loading, page rendering) uses [`anyhow::Result`] with
//! context, and raises [`StaticExtractError`] where a failure has a known
//! shape.
//!
//! At the top of the binary, [`user_friendly_error`] turns any
//! [`anyhow::Error`] into an [`ErrorContext`] carrying a suggestion and
//! details, which [`ErrorContext::display`] prints in colour.
//!
//! ```rust,no_run
//! use static_extract::core::{StaticExtractError, user_friendly_error};
//!
//! let error = anyhow::Error::from(StaticExtractError::PageNotFound {
//!     name: "index.html".to_string(),
//! });
//! user_friendly_error(error).display();
//! ```

use colored::Colorize;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

use crate::extract::ExtractError;

/// Failures of the command line tool with a known shape.
#[derive(Error, Debug)]
pub enum StaticExtractError {
    /// An explicitly requested config file does not exist.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// Path that was requested
        path: String,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("Invalid configuration file syntax in {file}")]
    ConfigParseError {
        /// Config file path
        file: String,
        /// Parser message
        reason: String,
    },

    /// The data file could not be read as a JSON or TOML object.
    #[error("Invalid data file: {file}")]
    DataFileError {
        /// Data file path
        file: String,
        /// What went wrong
        reason: String,
    },

    /// Tera could not load the template glob.
    #[error("Failed to load templates from '{pattern}'")]
    TemplateLoadError {
        /// Glob that was loaded
        pattern: String,
        /// Tera's message chain
        reason: String,
    },

    /// A static template failed to render during extraction.
    #[error("Failed to render static template '{name}'")]
    StaticRenderError {
        /// Template name
        name: String,
        /// Tera's message chain
        reason: String,
    },

    /// A page requested for rendering is not a loaded template.
    #[error("Page template '{name}' not found")]
    PageNotFound {
        /// Requested page name
        name: String,
    },

    /// Permission denied on a file system path.
    #[error("Permission denied: {operation}")]
    PermissionDenied {
        /// What was being done
        operation: String,
        /// Where
        path: String,
    },

    /// Any other file system failure.
    #[error("File system error: {operation}")]
    FileSystemError {
        /// What was being done
        operation: String,
        /// Where
        path: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

/// An error with optional details and a suggestion for resolving it.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: StaticExtractError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: StaticExtractError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion, shown in green.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details, shown in yellow.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error, details and suggestion to stderr with terminal colours.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl StdError for ErrorContext {}

/// Join an error's source chain into one message, skipping the error itself.
///
/// Tera puts the useful part of a failure (the undefined variable, the syntax
/// error location) in the source chain, not in the top-level message.
pub fn source_chain(error: &(dyn StdError + 'static)) -> String {
    let mut causes = Vec::new();
    let mut current = error.source();
    while let Some(cause) = current {
        causes.push(cause.to_string());
        current = cause.source();
    }
    causes.join(": ")
}

const TEMPLATE_SYNTAX_HINT: &str = "Check template syntax: variables use {{ var }}, control flow uses {% %}. \
     Ensure every variable the template uses is defined in the data file";

/// Convert any error into an [`ErrorContext`] with an actionable suggestion.
///
/// Recognises [`StaticExtractError`], [`ExtractError`] over Tera,
/// [`std::io::Error`], [`toml::de::Error`] and [`tera::Error`]. Anything else
/// becomes [`StaticExtractError::Other`] with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let error = match error.downcast::<StaticExtractError>() {
        Ok(known) => return create_error_context(known),
        Err(error) => error,
    };

    if let Some(extract_error) = error.downcast_ref::<ExtractError<tera::Error>>() {
        return extract_error_context(extract_error);
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(StaticExtractError::PermissionDenied {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check file ownership and permissions of the output directories")
                .with_details(io_error.to_string());
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(StaticExtractError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct")
                .with_details(io_error.to_string());
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(StaticExtractError::ConfigParseError {
            file: crate::constants::DEFAULT_CONFIG_FILE.to_string(),
            reason: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax. Verify quotes, brackets and key names")
        .with_details(toml_error.to_string());
    }

    if let Some(tera_error) = error.downcast_ref::<tera::Error>() {
        let mut reason = tera_error.to_string();
        let chain = source_chain(tera_error);
        if !chain.is_empty() {
            reason = format!("{reason}: {chain}");
        }
        return ErrorContext::new(StaticExtractError::Other {
            message: "Template error".to_string(),
        })
        .with_suggestion(TEMPLATE_SYNTAX_HINT)
        .with_details(reason);
    }

    let mut message = error.to_string();
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(StaticExtractError::Other {
        message,
    })
}

fn extract_error_context(error: &ExtractError<tera::Error>) -> ErrorContext {
    match error {
        ExtractError::Render {
            name,
            source,
        } => {
            let mut reason = source.to_string();
            let chain = source_chain(source);
            if !chain.is_empty() {
                reason = format!("{reason}: {chain}");
            }
            create_error_context(StaticExtractError::StaticRenderError {
                name: name.clone(),
                reason,
            })
        }
        ExtractError::Write {
            path,
            source,
        } => ErrorContext::new(StaticExtractError::FileSystemError {
            operation: "write static asset".to_string(),
            path: path.display().to_string(),
        })
        .with_suggestion("Check that the output directory is writable and not blocked by a file")
        .with_details(format!("{}: {}", path.display(), source)),
        ExtractError::Clone(source) | ExtractError::Redefine(source) => {
            ErrorContext::new(StaticExtractError::Other {
                message: error.to_string(),
            })
            .with_details(source.to_string())
        }
    }
}

fn create_error_context(error: StaticExtractError) -> ErrorContext {
    match &error {
        StaticExtractError::ConfigNotFound {
            path,
        } => {
            let details = format!("No file exists at {path}");
            ErrorContext::new(error)
                .with_suggestion(format!(
                    "Create the file or omit --config to use ./{}",
                    crate::constants::DEFAULT_CONFIG_FILE
                ))
                .with_details(details)
        }
        StaticExtractError::ConfigParseError {
            reason,
            ..
        } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_suggestion("Check the TOML syntax. Allowed keys: templates, data, output_dir, url_prefix, pages_dir, pages")
                .with_details(details)
        }
        StaticExtractError::DataFileError {
            reason,
            ..
        } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_suggestion("Use a .json or .toml file whose top level is an object")
                .with_details(details)
        }
        StaticExtractError::TemplateLoadError {
            reason,
            ..
        } => {
            let details = reason.clone();
            ErrorContext::new(error).with_suggestion(TEMPLATE_SYNTAX_HINT).with_details(details)
        }
        StaticExtractError::StaticRenderError {
            reason,
            ..
        } => {
            let details = reason.clone();
            ErrorContext::new(error).with_suggestion(TEMPLATE_SYNTAX_HINT).with_details(details)
        }
        StaticExtractError::PageNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Run 'static-extract plan' to list loaded templates"),
        StaticExtractError::PermissionDenied {
            path,
            ..
        } => {
            let details = format!("Insufficient permissions on {path}");
            ErrorContext::new(error)
                .with_suggestion("Check file ownership and permissions of the output directories")
                .with_details(details)
        }
        _ => ErrorContext::new(error),
    }
}

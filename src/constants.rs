//! Naming conventions and fixed markup used throughout static-extract.
//!
//! The prefixes decide which templates are treated as static assets, and the
//! head marker is the literal text the auto-injector searches for.

/// Template-name prefix that marks a stylesheet sub-template.
///
/// `static-css-main` is extracted to `main.css`.
pub const CSS_PREFIX: &str = "static-css-";

/// Template-name prefix that marks a script sub-template.
///
/// `static-js-app` is extracted to `app.js`.
pub const JS_PREFIX: &str = "static-js-";

/// File extension (without the dot) for extracted stylesheets.
pub const CSS_EXTENSION: &str = "css";

/// File extension (without the dot) for extracted scripts.
pub const JS_EXTENSION: &str = "js";

/// Literal marker that auto-injected tags are spliced in front of.
///
/// Matching is a plain substring search on template text, not markup-aware.
pub const HEAD_CLOSE_MARKER: &str = "</head>";

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "static-extract.toml";

/// Default template glob handed to Tera.
pub const DEFAULT_TEMPLATES_GLOB: &str = "templates/**/*";

/// Default directory for extracted asset files.
pub const DEFAULT_OUTPUT_DIR: &str = "static";

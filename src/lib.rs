//! static-extract - extract inline CSS/JS sub-templates into static files
//!
//! Sites built from templates often keep stylesheets and scripts as named
//! sub-templates so they can use template data. Served inline, that text is
//! repeated in every page and never cached. This crate renders those
//! sub-templates once, writes them to standalone files and rewrites the
//! template forest so pages reference the files instead.
//!
//! # Naming Convention
//!
//! | Template name | Extracted file | Reference tag |
//! |---------------|----------------|---------------|
//! | `static-css-main` | `main.css` | `<link rel="stylesheet" href="{prefix}/main.css">` |
//! | `static-js-app` | `app.js` | `<script src="{prefix}/app.js"></script>` |
//!
//! A static template included somewhere (`{% include "static-css-main" %}`)
//! renders its tag at the include site. Every other static template renders
//! nothing, and its tag is inserted before the first `</head>` in the forest,
//! stylesheets first.
//!
//! # Core Modules
//!
//! - [`extract`] - the extraction pipeline, generic over the template engine
//! - [`forest`] - the [`TemplateForest`](forest::TemplateForest) abstraction
//!   and its Tera implementation
//! - [`utils`] - file writing that leaves unchanged files untouched
//!
//! ## Command Line
//!
//! - [`cli`] - the `static-extract` command (`build`, `plan`)
//! - [`config`] - the `static-extract.toml` config file
//! - [`core`] - user-facing error reporting
//! - [`constants`] - naming prefixes and the head marker
//!
//! # Example
//!
//! ```rust,no_run
//! use tera::{Context, Tera};
//!
//! # fn example() -> anyhow::Result<()> {
//! let tera = Tera::new("templates/**/*")?;
//! let site = static_extract::extract::parse(&tera, &Context::new(), "public/static", "/static")?;
//! let html = site.render("index.html", &Context::new())?;
//! # Ok(())
//! # }
//! ```
//!
//! # Command Line Usage
//!
//! ```bash
//! # What would happen
//! static-extract plan
//!
//! # Extract assets into public/static and render index.html into public/
//! static-extract build --output-dir public/static --url-prefix /static \
//!     --pages-dir public --page index.html
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod extract;
pub mod forest;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

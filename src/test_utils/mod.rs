//! Test utilities for static-extract
//!
//! Helpers shared by unit and integration tests: logging that cooperates with
//! the test harness, and small template forest fixtures.
//!
//! ```rust,no_run
//! use static_extract::test_utils::{forest, init_test_logging};
//!
//! init_test_logging(None);
//! let tera = forest(&[("static-css-main", "body{}"), ("page", "<head></head>")]);
//! ```

use std::sync::Once;
use tera::{Context, Tera};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. With `level` set that level is used;
/// otherwise logging is enabled only when `RUST_LOG` is set.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}

/// Build a Tera forest from `(name, source)` pairs.
///
/// # Panics
///
/// When a source does not parse.
pub fn forest(templates: &[(&str, &str)]) -> Tera {
    let mut tera = Tera::default();
    if let Err(e) = tera.add_raw_templates(templates.to_vec()) {
        panic!("Invalid test template: {e:?}");
    }
    tera
}

/// Render `name` with `ctx`.
///
/// # Panics
///
/// When rendering fails.
pub fn render(tera: &Tera, name: &str, ctx: &Context) -> String {
    match tera.render(name, ctx) {
        Ok(output) => output,
        Err(e) => panic!("Failed to render '{name}': {e:?}"),
    }
}

/// Render every template of `tera` with an empty context, sorted by name.
///
/// Templates that fail to render map to `Err` with the error message, so a
/// snapshot also captures failures.
pub fn render_all(tera: &Tera) -> Vec<(String, Result<String, String>)> {
    let mut names: Vec<&str> = tera.get_template_names().collect();
    names.sort_unstable();
    names
        .into_iter()
        .map(|name| {
            let output = tera.render(name, &Context::new()).map_err(|e| e.to_string());
            (name.to_string(), output)
        })
        .collect()
}

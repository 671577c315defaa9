//! Static declaration classifier.
//!
//! Decides from a template name alone whether the template is a static asset
//! declaration, and if so which kind and which file stem it maps to.

use std::fmt;

use crate::constants::{CSS_EXTENSION, CSS_PREFIX, JS_EXTENSION, JS_PREFIX};

/// Kind of a static asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetKind {
    /// Stylesheet, referenced with `<link rel="stylesheet">`.
    Css,
    /// Script, referenced with `<script src>`.
    Js,
}

impl AssetKind {
    /// File extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            AssetKind::Css => CSS_EXTENSION,
            AssetKind::Js => JS_EXTENSION,
        }
    }

    /// Name of the extracted file, `stem.ext`.
    #[must_use]
    pub fn file_name(self, stem: &str) -> String {
        format!("{}.{}", stem, self.extension())
    }

    /// Reference tag pointing at the extracted file.
    ///
    /// `url_prefix` is used verbatim: no slash trimming, no encoding.
    ///
    /// ```
    /// use static_extract::extract::AssetKind;
    ///
    /// assert_eq!(
    ///     AssetKind::Css.tag("/static", "main"),
    ///     r#"<link rel="stylesheet" href="/static/main.css">"#
    /// );
    /// assert_eq!(AssetKind::Js.tag("", "app"), r#"<script src="/app.js"></script>"#);
    /// ```
    #[must_use]
    pub fn tag(self, url_prefix: &str, stem: &str) -> String {
        let href = format!("{}/{}", url_prefix, self.file_name(stem));
        match self {
            AssetKind::Css => format!(r#"<link rel="stylesheet" href="{}">"#, href),
            AssetKind::Js => format!(r#"<script src="{}"></script>"#, href),
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A template name recognised as a static asset declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<'a> {
    pub kind: AssetKind,
    /// The name with its prefix removed.
    pub stem: &'a str,
}

/// Classify a template name.
///
/// Names starting with [`CSS_PREFIX`] are CSS, names starting with
/// [`JS_PREFIX`] are JS, anything else is `None`. Matching is exact and
/// case-sensitive, and CSS is checked first. The stem is not validated.
///
/// ```
/// use static_extract::extract::{AssetKind, classify};
///
/// let c = classify("static-css-main").unwrap();
/// assert_eq!((c.kind, c.stem), (AssetKind::Css, "main"));
/// assert!(classify("page.html").is_none());
/// ```
#[must_use]
pub fn classify(name: &str) -> Option<Classified<'_>> {
    if let Some(stem) = name.strip_prefix(CSS_PREFIX) {
        Some(Classified {
            kind: AssetKind::Css,
            stem,
        })
    } else {
        name.strip_prefix(JS_PREFIX).map(|stem| Classified {
            kind: AssetKind::Js,
            stem,
        })
    }
}

/// Whether `name` is a static asset declaration of either kind.
#[must_use]
pub fn is_static(name: &str) -> bool {
    classify(name).is_some()
}

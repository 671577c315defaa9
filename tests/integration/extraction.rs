use static_extract::extract::{Extractor, Placement, parse};
use static_extract::test_utils::{forest, init_test_logging, render};
use tera::Context;

use crate::common::{TestSite, list_dir};

#[test]
fn test_css_and_js_injected_before_head() {
    init_test_logging(None);
    let site = TestSite::new();
    let tera = forest(&[
        ("static-css-main", "body { color: red; }"),
        ("static-js-app", r#"console.log("hi");"#),
        ("greeting", "hello"),
        ("page", r#"<head><title>T</title></head><body>{% include "greeting" %}</body>"#),
    ]);

    let result = parse(&tera, &Context::new(), site.path("dir"), "/static").unwrap();

    assert_eq!(site.read("dir/main.css"), "body { color: red; }");
    assert_eq!(site.read("dir/app.js"), r#"console.log("hi");"#);
    assert_eq!(
        render(&result, "page", &Context::new()),
        concat!(
            "<head><title>T</title>",
            r#"<link rel="stylesheet" href="/static/main.css">"#,
            r#"<script src="/static/app.js"></script>"#,
            "</head><body>hello</body>"
        )
    );
}

#[test]
fn test_css_tags_precede_js_tags() {
    let site = TestSite::new();
    let tera = forest(&[
        ("static-js-a", "a"),
        ("static-js-b", "b"),
        ("static-css-x", "x"),
        ("static-css-y", "y"),
        ("page", "<head></head>"),
    ]);

    let result = parse(&tera, &Context::new(), site.root(), "").unwrap();

    assert_eq!(
        render(&result, "page", &Context::new()),
        concat!(
            "<head>",
            r#"<link rel="stylesheet" href="/x.css">"#,
            r#"<link rel="stylesheet" href="/y.css">"#,
            r#"<script src="/a.js"></script>"#,
            r#"<script src="/b.js"></script>"#,
            "</head>"
        )
    );
}

#[test]
fn test_data_reaches_static_templates() {
    let site = TestSite::new();
    let tera = forest(&[("static-css-theme", "/* {{ Theme }} */")]);
    let mut data = Context::new();
    data.insert("Theme", "dark");

    parse(&tera, &data, site.root(), "").unwrap();

    assert_eq!(site.read("theme.css"), "/* dark */");
}

#[test]
fn test_missing_head_marker_drops_tags() {
    let site = TestSite::new();
    let tera = forest(&[
        ("static-css-main", "body{}"),
        ("static-js-app", "go()"),
        ("page", "<html><body>x</body></html>"),
    ]);

    let extraction = Extractor::new(site.path("out")).run(&tera, &Context::new()).unwrap();

    assert_eq!(list_dir(&site.path("out")), vec!["app.js", "main.css"]);
    assert_eq!(render(&extraction.forest, "page", &Context::new()), "<html><body>x</body></html>");
    assert_eq!(extraction.dropped().count(), 2);
}

#[test]
fn test_explicit_placement_is_not_injected() {
    let site = TestSite::new();
    let tera = forest(&[
        ("static-css-main", "body{}"),
        ("page", r#"<head></head><body>{% include "static-css-main" %}</body>"#),
    ]);

    let result = parse(&tera, &Context::new(), site.root(), "/s").unwrap();

    let page = render(&result, "page", &Context::new());
    assert_eq!(page, r#"<head></head><body><link rel="stylesheet" href="/s/main.css"></body>"#);
    assert_eq!(page.matches("main.css").count(), 1);
}

#[test]
fn test_explicit_placement_inside_loop_and_conditional() {
    let site = TestSite::new();
    let tera = forest(&[
        ("static-css-main", "body{}"),
        ("static-js-app", "go()"),
        (
            "page",
            r#"<head></head>{% for x in xs %}{% if x %}{% include "static-css-main" %}{% endif %}{% else %}{% include "static-js-app" %}{% endfor %}"#,
        ),
    ]);

    let extraction = Extractor::new(site.root()).run(&tera, &Context::new()).unwrap();

    assert!(extraction.assets.iter().all(|a| a.placement == Placement::Explicit));
    let mut data = Context::new();
    data.insert("xs", &Vec::<bool>::new());
    assert_eq!(
        render(&extraction.forest, "page", &data),
        r#"<head></head><script src="/app.js"></script>"#
    );
    data.insert("xs", &[true]);
    assert_eq!(
        render(&extraction.forest, "page", &data),
        r#"<head></head><link rel="stylesheet" href="/main.css">"#
    );
}

#[test]
fn test_raw_content_never_reaches_output() {
    let site = TestSite::new();
    let tera = forest(&[
        ("static-css-main", "SECRET_CSS"),
        ("static-js-app", "SECRET_JS"),
        ("layout", r#"<head></head>{% include "static-css-main" %}"#),
    ]);

    let result = parse(&tera, &Context::new(), site.root(), "").unwrap();

    for name in ["static-css-main", "static-js-app", "layout"] {
        let output = render(&result, name, &Context::new());
        assert!(!output.contains("SECRET"), "{name} leaked raw content: {output}");
    }
    assert_eq!(render(&result, "static-js-app", &Context::new()), "");
}

#[test]
fn test_injection_into_conditional_arm_of_layout() {
    let site = TestSite::new();
    let tera = forest(&[
        ("static-css-main", "body{}"),
        (
            "layout",
            "{% if amp %}<head><style amp></style></head>{% else %}<head></head>{% endif %}",
        ),
    ]);

    let result = parse(&tera, &Context::new(), site.root(), "").unwrap();

    // Only the first arm containing the marker is edited.
    let mut data = Context::new();
    data.insert("amp", &true);
    assert_eq!(
        render(&result, "layout", &data),
        r#"<head><style amp></style><link rel="stylesheet" href="/main.css"></head>"#
    );
    data.insert("amp", &false);
    assert_eq!(render(&result, "layout", &data), "<head></head>");
}

#[test]
fn test_forest_without_static_templates_is_equivalent() {
    let site = TestSite::new();
    let tera = forest(&[("page", "<head></head><p>{{ 1 + 1 }}</p>")]);

    let result = parse(&tera, &Context::new(), site.path("out"), "/s").unwrap();

    assert_eq!(render(&result, "page", &Context::new()), "<head></head><p>2</p>");
    assert!(list_dir(&site.path("out")).is_empty());
}

#[test]
fn test_include_inside_child_block_renders_tag_in_place() {
    let site = TestSite::new();
    let tera = forest(&[
        ("static-js-widget", "widget()"),
        ("base", "<html><head><title>T</title></head><body>{% block body %}{% endblock body %}</body></html>"),
        (
            "page",
            r#"{% extends "base" %}{% block body %}<p>{% include "static-js-widget" %}</p>{% endblock body %}"#,
        ),
    ]);

    let extraction = Extractor::new(site.root()).with_url_prefix("/s").run(&tera, &Context::new()).unwrap();

    assert_eq!(extraction.assets[0].placement, Placement::Explicit);
    assert_eq!(
        render(&extraction.forest, "page", &Context::new()),
        r#"<html><head><title>T</title></head><body><p><script src="/s/widget.js"></script></p></body></html>"#
    );
}

#[test]
fn test_head_inside_layout_block_receives_tags() {
    let site = TestSite::new();
    let tera = forest(&[
        ("static-css-main", "body{}"),
        ("base", "<html>{% block head %}<head><title>T</title></head>{% endblock head %}<body>{% block body %}{% endblock body %}</body></html>"),
        ("page", r#"{% extends "base" %}{% block body %}hi{% endblock body %}"#),
    ]);

    let extraction = Extractor::new(site.root()).run(&tera, &Context::new()).unwrap();

    assert_eq!(extraction.dropped().count(), 0);
    assert_eq!(extraction.assets[0].placement, Placement::Injected);
    assert_eq!(
        render(&extraction.forest, "page", &Context::new()),
        r#"<html><head><title>T</title><link rel="stylesheet" href="/main.css"></head><body>hi</body></html>"#
    );
}

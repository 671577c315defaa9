use static_extract::extract::{ExtractError, parse};
use static_extract::test_utils::{forest, render_all};
use tera::Context;

use crate::common::{TestSite, list_dir};

#[test]
fn test_original_forest_is_unchanged_after_success() {
    let site = TestSite::new();
    let tera = forest(&[
        ("static-css-main", "body{}"),
        ("static-js-app", "go()"),
        ("page", r#"<head></head>{% include "static-js-app" %}"#),
    ]);
    let before = render_all(&tera);

    let result = parse(&tera, &Context::new(), site.root(), "/s").unwrap();

    assert_eq!(render_all(&tera), before);
    assert_ne!(render_all(&result), before);
}

#[test]
fn test_render_failure_writes_nothing() {
    let site = TestSite::new();
    let tera = forest(&[
        ("static-css-a", "a{}"),
        ("static-css-b", "{{ undefined_value }}"),
        ("static-js-c", "c()"),
        ("page", "<head></head>"),
    ]);
    let before = render_all(&tera);

    let err = parse(&tera, &Context::new(), site.path("out"), "").unwrap_err();

    match &err {
        ExtractError::Render {
            name,
            ..
        } => assert_eq!(name, "static-css-b"),
        other => panic!("expected render error, got {other:?}"),
    }
    assert!(err.engine_error().is_some());
    assert!(list_dir(&site.path("out")).is_empty());
    assert_eq!(render_all(&tera), before);
}

#[test]
fn test_write_failure_keeps_earlier_files_and_original_forest() {
    let site = TestSite::new();
    // A regular file where the output directory should be.
    site.write("blocked", "not a directory");
    let tera = forest(&[("static-css-main", "body{}"), ("page", "<head></head>")]);
    let before = render_all(&tera);

    let err = parse(&tera, &Context::new(), site.path("blocked"), "").unwrap_err();

    assert!(matches!(err, ExtractError::Write { .. }), "got {err:?}");
    assert!(err.to_string().contains("main.css"));
    assert_eq!(render_all(&tera), before);
}

#[test]
fn test_rejected_redefinition_keeps_files_and_original_forest() {
    let site = TestSite::new();
    let tera = forest(&[
        ("static-css-main", "body{}"),
        ("page", r#"<head></head>{% include "static-css-main" %}"#),
    ]);
    let before = render_all(&tera);

    // The explicitly placed tag embeds the prefix, which does not parse.
    let err = parse(&tera, &Context::new(), site.path("out"), "{% if %}").unwrap_err();

    assert!(matches!(err, ExtractError::Redefine(_)), "got {err:?}");
    assert_eq!(site.read("out/main.css"), "body{}");
    assert_eq!(render_all(&tera), before);
}

#[test]
fn test_repeated_calls_on_one_forest_are_independent() {
    let site = TestSite::new();
    let tera = forest(&[("static-css-main", "body{}"), ("page", "<head></head>")]);

    let first = parse(&tera, &Context::new(), site.path("a"), "/a").unwrap();
    let second = parse(&tera, &Context::new(), site.path("b"), "/b").unwrap();

    let page = |t: &tera::Tera| t.render("page", &Context::new()).unwrap();
    assert_eq!(page(&first), r#"<head><link rel="stylesheet" href="/a/main.css"></head>"#);
    assert_eq!(page(&second), r#"<head><link rel="stylesheet" href="/b/main.css"></head>"#);
}

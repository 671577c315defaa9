use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{TestSite, backdate, mtime};

fn static_extract(site: &TestSite) -> Command {
    let mut cmd = Command::cargo_bin("static-extract").unwrap();
    cmd.current_dir(site.root()).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn basic_site() -> TestSite {
    let site = TestSite::new();
    site.template("static-css-main.css", "body { color: {{ color }}; }")
        .template("static-js-app.js", r#"console.log("{{ title }}");"#)
        .template(
            "index.html",
            "<html><head><title>{{ title }}</title></head><body></body></html>",
        )
        .write("site.json", r#"{"title": "Home", "color": "red"}"#)
        .write(
            "static-extract.toml",
            r#"
data = "site.json"
output_dir = "public/static"
url_prefix = "/static"
pages_dir = "public"
pages = ["index.html"]
"#,
        );
    site
}

#[test]
fn test_build_writes_assets_and_pages() {
    let site = basic_site();

    static_extract(&site)
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("css main -> "))
        .stdout(predicate::str::contains("(created, injected)"))
        .stdout(predicate::str::contains("page index.html"));

    assert_eq!(site.read("public/static/main.css"), "body { color: red; }");
    assert_eq!(site.read("public/static/app.js"), r#"console.log("Home");"#);
    assert_eq!(
        site.read("public/index.html"),
        concat!(
            "<html><head><title>Home</title>",
            r#"<link rel="stylesheet" href="/static/main.css">"#,
            r#"<script src="/static/app.js"></script>"#,
            "</head><body></body></html>"
        )
    );
}

#[test]
fn test_rebuild_keeps_mtimes() {
    let site = basic_site();
    static_extract(&site).arg("build").assert().success();
    backdate(&site.path("public/static/main.css"));
    backdate(&site.path("public/index.html"));
    let css_before = mtime(&site.path("public/static/main.css"));
    let page_before = mtime(&site.path("public/index.html"));

    static_extract(&site)
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 file(s) written"));

    assert_eq!(mtime(&site.path("public/static/main.css")), css_before);
    assert_eq!(mtime(&site.path("public/index.html")), page_before);
}

#[test]
fn test_flags_override_config_file() {
    let site = basic_site();

    static_extract(&site)
        .args(["build", "--output-dir", "assets", "--url-prefix", "/a", "--pages-dir", "out"])
        .assert()
        .success();

    assert!(site.exists("assets/main.css"));
    assert!(!site.exists("public/static/main.css"));
    assert!(site.read("out/index.html").contains(r#"href="/a/main.css""#));
}

#[test]
fn test_quiet_prints_nothing() {
    let site = basic_site();

    static_extract(&site).args(["--quiet", "build"]).assert().success().stdout(predicate::str::is_empty());

    assert!(site.exists("public/index.html"));
}

#[test]
fn test_plan_writes_nothing() {
    let site = basic_site();

    static_extract(&site)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("static-css-main -> main.css (injected)"))
        .stdout(predicate::str::contains(r#"<link rel="stylesheet" href="/static/main.css">"#))
        .stdout(predicate::str::contains("tags are injected into 'index.html'"));

    assert!(!site.exists("public"));
}

#[test]
fn test_plan_warns_without_head() {
    let site = TestSite::new();
    site.template("static-css-main", "body{}").template("index.html", "<body></body>");

    static_extract(&site)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("(dropped)"))
        .stdout(predicate::str::contains("no template contains </head>"));
}

#[test]
fn test_missing_config_file() {
    let site = basic_site();

    static_extract(&site)
        .args(["--config", "nope.toml", "build"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found: nope.toml"));
}

#[test]
fn test_render_failure_is_reported() {
    let site = TestSite::new();
    site.template("static-css-bad.css", "{{ nowhere }}");

    static_extract(&site)
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to render static template 'static-css-bad'"))
        .stderr(predicate::str::contains("nowhere"));

    assert!(!site.exists("static"));
}

#[test]
fn test_unknown_page() {
    let site = basic_site();

    static_extract(&site)
        .args(["build", "--page", "missing.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page template 'missing.html' not found"));
}

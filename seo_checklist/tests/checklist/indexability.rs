use crate::helpers::*;
use seo_checklist::report::Verdict;

#[tokio::test]
async fn robots_meta_noindex_is_not_indexable() {
    let server = FixtureServer::start().await;
    server.route(
        "/private",
        Fixture::ok(
            r#"<html><head><meta name="robots" content="noindex, nofollow"></head><body></body></html>"#,
        ),
    );

    let url = server.url("/private");
    let table = server.checklist().run(&url).await;
    let cell = table.row(&url).unwrap().get("No index Meta Tag").unwrap();

    assert_eq!(cell.verdict, Verdict::Fail);
    assert!(cell.text.contains("noindex"));
    assert!(cell.text.contains("not indexable"));
}

#[tokio::test]
async fn x_robots_tag_header_is_not_indexable() {
    let server = FixtureServer::start().await;
    server.route(
        "/",
        Fixture::ok("<html><head></head><body></body></html>").with_header("X-Robots-Tag", "none"),
    );

    let url = server.url("/");
    let table = server.checklist().run(&url).await;
    let row = table.row(&url).unwrap();

    assert_eq!(row.get("No index Response Header").unwrap().verdict, Verdict::Fail);
    assert_eq!(row.get("No index Meta Tag").unwrap().verdict, Verdict::Pass);
    assert_eq!(row.get("Mobile Friendly").unwrap().verdict, Verdict::Fail);
}

#[tokio::test]
async fn repeated_x_robots_tag_headers_are_all_read() {
    let server = FixtureServer::start().await;
    server.route(
        "/",
        Fixture::ok("<html><head></head><body></body></html>")
            .with_header("X-Robots-Tag", "nofollow")
            .with_header("X-Robots-Tag", "noindex"),
    );

    let url = server.url("/");
    let table = server.checklist().run(&url).await;
    let cell = table.row(&url).unwrap().get("No index Response Header").unwrap();

    assert_eq!(cell.verdict, Verdict::Fail, "{}", cell.text);
    assert!(cell.text.contains("is not indexable"));
}

#[tokio::test]
async fn canonical_to_another_url_is_flagged() {
    let server = FixtureServer::start().await;
    let url = server.url("/duplicate");
    let canonical = server.url("/original");

    server.route(
        "/duplicate",
        Fixture::ok(format!(
            r#"<html><head><link rel="canonical" href="{canonical}"></head></html>"#
        )),
    );

    let table = server.checklist().run(&url).await;
    let cell = table.row(&url).unwrap().get("Canonical").unwrap();

    assert_eq!(cell.verdict, Verdict::Warn);
    assert!(cell.text.contains(&canonical));
    assert!(cell.text.ends_with("⚠️"));
}

#[tokio::test]
async fn unindexed_url_is_reported() {
    let server = FixtureServer::start().await;
    server
        .route("/", Fixture::ok("<html></html>"))
        .route("/search", Fixture::ok(search_results("https://someone-else.example")));

    let url = server.url("/");
    let table = server.checklist().run(&url).await;
    let cell = table.row(&url).unwrap().get("Indexation").unwrap();

    assert_eq!(cell.verdict, Verdict::Fail);
    assert!(cell.text.contains("is not indexed"));
}

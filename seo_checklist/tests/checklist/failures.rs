use crate::helpers::*;
use async_trait::async_trait;
use seo_checklist::checklist::Checklist;
use seo_checklist::checks::bots::CRAWLERS;
use seo_checklist::checks::CheckKind;
use seo_checklist::error::CheckResult;
use seo_checklist::features::indexation::IndexationProvider;
use seo_checklist::Client;
use seo_checklist::report::Verdict;
use std::time::{Duration, Instant};

#[tokio::test]
async fn missing_page_records_status_verdicts() {
    let server = FixtureServer::start().await;
    server.route(
        "/pagespeed",
        Fixture::json(500, r#"{"error": {"code": 500, "message": "Lighthouse returned error"}}"#),
    );

    let url = server.url("/gone");
    let table = server.checklist().run(&url).await;
    let row = table.row(&url).unwrap();

    let canonical = row.get("Canonical").unwrap();
    assert_eq!(canonical.verdict, Verdict::Fail);
    assert!(canonical.text.contains("status code of 404"));

    let schema = row.get("Schema.org").unwrap();
    assert!(schema.text.contains("status code of 404"));

    for (crawler, _) in CRAWLERS {
        let cell = row.get(crawler).unwrap();
        assert_eq!(cell.verdict, Verdict::Fail);
        assert!(cell.text.starts_with("Response 404."));
    }

    // a failing PageSpeed call still leaves a cell for the check
    let cwv = row.get("Core Web Vitals").unwrap();
    assert_eq!(cwv.verdict, Verdict::Error);
    assert!(cwv.text.contains("Error 500"));
    assert!(row.get("LCP Result").is_none());
}

#[tokio::test]
async fn unreachable_site_never_aborts_the_run() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = format!("http://{addr}/");
    let mut config = seo_checklist::configuration::Configuration::new();
    config
        .with_request_timeout(Some(Duration::from_secs(2)))
        .with_search_url(&format!("http://{addr}/search"))
        .with_pagespeed_url(&format!("http://{addr}/pagespeed"));

    let mut started = Vec::new();
    let table = Checklist::new(config)
        .unwrap()
        .run_with_progress(&url, |check| started.push(check))
        .await;

    assert_eq!(started.len(), 8);

    let row = table.row(&url).unwrap();
    assert_eq!(row.checks.len(), 8);
    assert!(row.cells().all(|c| c.verdict == Verdict::Error));

    // each crawler keeps its own column
    for (crawler, _) in CRAWLERS {
        let cell = row.get(crawler).unwrap();
        assert!(cell.text.contains(crawler));
    }

    let mobile = row.get("Mobile Friendly").unwrap();
    assert!(mobile.text.starts_with("Mobile Friendly Check failed with error"));
}

#[tokio::test]
async fn indexation_can_be_disabled() {
    let server = FixtureServer::start().await;
    server.route("/", Fixture::ok("<html></html>"));

    let mut config = server.configuration();
    config.with_indexation(false);

    let url = server.url("/");
    let table = Checklist::new(config).unwrap().run(&url).await;
    let cell = table.row(&url).unwrap().get("Indexation").unwrap();

    assert_eq!(cell.verdict, Verdict::Error);
    assert!(cell.text.contains("Not configured"));
    assert!(server.seen("/search").is_empty());
}

#[tokio::test]
async fn running_a_check_twice_keeps_one_entry() {
    let server = FixtureServer::start().await;
    server.route("/", Fixture::ok("<html></html>"));

    let url = server.url("/");
    let checklist = server.checklist();
    let mut table = checklist.run(&url).await;

    let cells = checklist.run_check(CheckKind::Canonical, &url).await;
    table.record(&url, CheckKind::Canonical, cells);

    let row = table.row(&url).unwrap();
    assert_eq!(row.cells().filter(|c| c.column == "Canonical").count(), 1);
}

#[tokio::test]
async fn stalled_site_times_out_per_request() {
    let server = FixtureServer::start().await;
    server.route("/", Fixture::stalled());

    let mut config = server.configuration();
    config.with_request_timeout(Some(Duration::from_millis(500)));

    let url = server.url("/");
    let started = Instant::now();
    let table = tokio::time::timeout(
        Duration::from_secs(60),
        Checklist::new(config).unwrap().run(&url),
    )
    .await
    .expect("run finishes once every request timed out");

    // 12 page fetches hang, each one bounded by the request timeout
    assert!(started.elapsed() < Duration::from_secs(30));

    let row = table.row(&url).unwrap();
    assert_eq!(row.checks.len(), 8);

    for column in ["Mobile Friendly", "Canonical", "Schema.org", "GoogleBot"] {
        let cell = row.get(column).unwrap();
        assert_eq!(cell.verdict, Verdict::Error, "{column}: {}", cell.text);
    }
}

struct FixedIndex(bool);

#[async_trait]
impl IndexationProvider for FixedIndex {
    async fn is_indexed(&self, _client: &Client, _url: &str) -> CheckResult<bool> {
        Ok(self.0)
    }

    fn provider_name(&self) -> &'static str {
        "fixed"
    }
}

#[tokio::test]
async fn indexation_provider_can_be_swapped() {
    let server = FixtureServer::start().await;
    server.route("/", Fixture::ok("<html></html>"));

    let url = server.url("/");
    let table = server
        .checklist()
        .with_indexation_provider(Some(Box::new(FixedIndex(true))))
        .run(&url)
        .await;

    let cell = table.row(&url).unwrap().get("Indexation").unwrap();
    assert_eq!(cell.verdict, Verdict::Pass);
    assert!(cell.text.contains("is indexed"));
    assert!(server.seen("/search").is_empty());
}

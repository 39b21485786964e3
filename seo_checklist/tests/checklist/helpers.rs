use seo_checklist::checklist::Checklist;
use seo_checklist::configuration::Configuration;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const STALL: Duration = Duration::from_secs(120);

/// A canned response.
#[derive(Clone)]
pub struct Fixture {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
    /// Accept the connection and never answer.
    pub stall: bool,
}

impl Fixture {
    pub fn ok(body: impl Into<String>) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: vec![("Content-Type".into(), "text/html; charset=utf-8".into())],
            body: body.into(),
            stall: false,
        }
    }

    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: vec![("Content-Type".into(), "application/json".into())],
            body: body.into(),
            stall: false,
        }
    }

    pub fn stalled() -> Self {
        Self {
            stall: true,
            ..Self::ok("")
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A request seen by the server.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub target: String,
    pub user_agent: Option<String>,
}

/// Local server standing in for the audited site, the search engine and the PageSpeed API.
pub struct FixtureServer {
    pub addr: SocketAddr,
    pub requests: Arc<Mutex<Vec<SeenRequest>>>,
    routes: Arc<Mutex<HashMap<String, Fixture>>>,
}

impl FixtureServer {
    /// Start serving. Routes are keyed by path without query; unknown paths answer 404.
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let routes: Arc<Mutex<HashMap<String, Fixture>>> = Arc::new(Mutex::new(HashMap::new()));
        let seen = Arc::clone(&requests);
        let served = Arc::clone(&routes);

        tokio::spawn(async move {
            loop {
                let (mut stream, _) = match listener.accept().await {
                    Ok(v) => v,
                    Err(_) => break,
                };
                let routes = Arc::clone(&served);
                let seen = Arc::clone(&seen);

                tokio::spawn(async move {
                    let mut req = Vec::new();
                    let mut buf = [0u8; 4096];

                    loop {
                        let n = match stream.read(&mut buf).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => n,
                        };
                        req.extend_from_slice(&buf[..n]);
                        if req.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }

                    let req_text = String::from_utf8_lossy(&req);
                    let target = req_text
                        .lines()
                        .next()
                        .unwrap_or_default()
                        .split_whitespace()
                        .nth(1)
                        .unwrap_or_default()
                        .to_string();
                    let user_agent = req_text
                        .lines()
                        .find(|l| l.to_ascii_lowercase().starts_with("user-agent:"))
                        .map(|l| l["user-agent:".len()..].trim().to_string());

                    seen.lock().unwrap().push(SeenRequest {
                        target: target.clone(),
                        user_agent,
                    });

                    let path = target.split('?').next().unwrap_or_default();
                    let fixture = routes
                        .lock()
                        .unwrap()
                        .get(path)
                        .cloned()
                        .unwrap_or_else(|| Fixture::status(404, "<html><body>not found</body></html>"));

                    if fixture.stall {
                        tokio::time::sleep(STALL).await;
                        return;
                    }

                    let mut head = format!(
                        "HTTP/1.1 {} Fixture\r\nContent-Length: {}\r\nConnection: close\r\n",
                        fixture.status,
                        fixture.body.len()
                    );
                    for (name, value) in &fixture.headers {
                        head.push_str(&format!("{name}: {value}\r\n"));
                    }
                    head.push_str("\r\n");

                    let _ = stream.write_all(head.as_bytes()).await;
                    let _ = stream.write_all(fixture.body.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        Self {
            addr,
            requests,
            routes,
        }
    }

    /// Serve a fixture on a path.
    pub fn route(&self, path: &str, fixture: Fixture) -> &Self {
        self.routes.lock().unwrap().insert(path.to_string(), fixture);
        self
    }

    /// An absolute url on the server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Requests whose target starts with the path.
    pub fn seen(&self, path: &str) -> Vec<SeenRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.target.starts_with(path))
            .cloned()
            .collect()
    }

    /// A configuration pointing both third-party services at this server.
    pub fn configuration(&self) -> Configuration {
        let mut config = Configuration::new();
        config
            .with_request_timeout(Some(REQUEST_TIMEOUT))
            .with_search_url(&self.url("/search"))
            .with_pagespeed_url(&self.url("/pagespeed"));
        config
    }

    pub fn checklist(&self) -> Checklist {
        Checklist::new(self.configuration()).expect("build checklist")
    }
}

/// A PageSpeed Insights body with the given raw values for LCP, CLS, SI, FCP and TBT.
pub fn pagespeed_body(values: [f64; 5]) -> String {
    let ids = [
        "largest-contentful-paint",
        "cumulative-layout-shift",
        "speed-index",
        "first-contentful-paint",
        "total-blocking-time",
    ];
    let audits: serde_json::Map<String, serde_json::Value> = ids
        .iter()
        .zip(values)
        .map(|(id, v)| {
            (
                id.to_string(),
                serde_json::json!({ "id": id, "displayValue": format!("{v}"), "numericValue": v }),
            )
        })
        .collect();

    serde_json::json!({
        "id": "fixture",
        "lighthouseResult": { "audits": audits }
    })
    .to_string()
}

/// A search results page whose first organic link mentions the url.
pub fn search_results(url: &str) -> String {
    format!(
        r#"<html><body><div id="search">
        <a href="{url}" data-ved="2ahUKEwi" jsname="ACyKwe"><h3>Fixture</h3><cite>{url}</cite></a>
        </div></body></html>"#
    )
}

use crate::error::CheckResult;
use reqwest::header::{HeaderMap, USER_AGENT};
use reqwest::{Client, StatusCode};
use scraper::Html;

/// Represent a page fetched. The html is parsed on demand with [scraper](https://crates.io/crates/scraper).
#[derive(Debug, Clone)]
pub struct Page {
    /// The status code of the response.
    pub status_code: StatusCode,
    /// The response headers.
    pub headers: HeaderMap,
    /// The response body.
    html: String,
}

/// Every value of a header joined with `, `. Repeated headers are legal and all of them count.
pub fn joined_header(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(name)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

impl Page {
    /// Fetch the page with the client defaults.
    pub async fn new(url: &str, client: &Client) -> CheckResult<Self> {
        Self::fetch(url, client, None).await
    }

    /// Fetch the page sending a specific user agent.
    pub async fn new_with_user_agent(
        url: &str,
        client: &Client,
        user_agent: &str,
    ) -> CheckResult<Self> {
        Self::fetch(url, client, Some(user_agent)).await
    }

    async fn fetch(url: &str, client: &Client, user_agent: Option<&str>) -> CheckResult<Self> {
        let mut request = client.get(url);

        if let Some(agent) = user_agent {
            request = request.header(USER_AGENT, agent);
        }

        let res = request.send().await?;
        let status_code = res.status();
        let headers = res.headers().clone();
        let html = res.text().await?;

        log::debug!("fetched {url} - {status_code}");

        Ok(Page {
            status_code,
            headers,
            html,
        })
    }

    /// The response answered with 200.
    pub fn is_ok(&self) -> bool {
        self.status_code == StatusCode::OK
    }

    /// A response header as text, repeated values joined.
    pub fn header(&self, name: &str) -> Option<String> {
        joined_header(&self.headers, name)
    }

    /// HTML parsed with scraper.
    pub fn parse_html(&self) -> Html {
        Html::parse_document(&self.html)
    }
}

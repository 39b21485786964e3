//! Search engine indexation lookup.
//!
//! No official API answers "is this url indexed", so the shipped provider
//! scrapes a `site:` query on the Google results page. The markup it relies on
//! is undocumented and changes without notice; the lookup sits behind
//! [`IndexationProvider`] so it can be replaced or turned off on its own.

use crate::configuration::{Configuration, BROWSER_USER_AGENT, SEARCH_URL};
use crate::error::CheckResult;
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use scraper::{Html, Selector};

lazy_static! {
    /// Organic result link on the Google results page.
    static ref RESULT_LINK: Selector =
        Selector::parse(r#"a[href][data-ved][jsname="ACyKwe"]"#).expect("result link selector");
}

/// Answers whether a url is present in a search engine index.
#[async_trait]
pub trait IndexationProvider: Send + Sync {
    /// Look the url up.
    async fn is_indexed(&self, client: &Client, url: &str) -> CheckResult<bool>;

    /// Provider name for logging/debugging.
    fn provider_name(&self) -> &'static str;
}

/// `site:` lookup on the Google results page.
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleSiteSearch {
    search_url: String,
    user_agent: String,
}

impl Default for GoogleSiteSearch {
    fn default() -> Self {
        Self {
            search_url: SEARCH_URL.into(),
            user_agent: BROWSER_USER_AGENT.into(),
        }
    }
}

impl GoogleSiteSearch {
    /// Create a new provider with the default endpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider set up from the run configuration.
    pub fn from_config(config: &Configuration) -> Self {
        Self::new()
            .with_search_url(config.search_url.as_str())
            .with_user_agent(config.browser_user_agent.as_str())
    }

    /// Use a custom results endpoint.
    pub fn with_search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    /// Use a custom browser user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// The url appears inside the first organic result link of the results page.
pub fn results_contain(results: &str, url: &str) -> bool {
    let html = Html::parse_document(results);

    html.select(&RESULT_LINK)
        .next()
        .map(|link| link.html().contains(url))
        .unwrap_or_default()
}

#[async_trait]
impl IndexationProvider for GoogleSiteSearch {
    async fn is_indexed(&self, client: &Client, url: &str) -> CheckResult<bool> {
        let query = format!("site:{url}");

        let res = client
            .get(&self.search_url)
            .query(&[("q", query.as_str())])
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        log::debug!("search results status {}", res.status());

        let body = res.text().await?;

        Ok(results_contain(&body, url))
    }

    fn provider_name(&self) -> &'static str {
        "google"
    }
}

use std::time::Duration;

/// Default PageSpeed Insights endpoint.
pub const PAGESPEED_URL: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";
/// Default search engine results page.
pub const SEARCH_URL: &str = "https://www.google.com/search";
/// Desktop browser user agent sent to the search engine so the results page is not bot-blocked.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36";
/// User agent used for plain page fetches.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The PageSpeed Insights analysis strategy.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Strategy {
    #[default]
    /// Emulate a mobile device.
    Mobile,
    /// Emulate a desktop browser.
    Desktop,
}

/// Structure to configure `Checklist`.
/// ```rust
/// use seo_checklist::configuration::{Configuration, Strategy};
/// use std::time::Duration;
///
/// let mut config = Configuration::new();
/// config
///     .with_request_timeout(Some(Duration::from_secs(10)))
///     .with_strategy(Strategy::Desktop);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Timeout applied to every outbound request. `None` waits forever.
    pub request_timeout: Option<Duration>,
    /// Maximum redirects followed per request.
    pub redirect_limit: usize,
    /// User-Agent for plain page fetches.
    pub user_agent: String,
    /// User-Agent for the search engine results page.
    pub browser_user_agent: String,
    /// Search engine results endpoint queried with `site:<url>`.
    pub search_url: String,
    /// PageSpeed Insights endpoint.
    pub pagespeed_url: String,
    /// PageSpeed analysis strategy.
    pub strategy: Strategy,
    /// Optional PageSpeed Insights API key.
    pub pagespeed_api_key: Option<String>,
    /// Run the search engine indexation lookup.
    pub indexation: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            request_timeout: Some(Duration::from_secs(30)),
            redirect_limit: 10,
            user_agent: DEFAULT_USER_AGENT.into(),
            browser_user_agent: BROWSER_USER_AGENT.into(),
            search_url: SEARCH_URL.into(),
            pagespeed_url: PAGESPEED_URL.into(),
            strategy: Strategy::default(),
            pagespeed_api_key: None,
            indexation: true,
        }
    }
}

impl Configuration {
    /// Represents configuration defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timeout for every request.
    pub fn with_request_timeout(&mut self, timeout: Option<Duration>) -> &mut Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the redirect limit.
    pub fn with_redirect_limit(&mut self, limit: usize) -> &mut Self {
        self.redirect_limit = limit;
        self
    }

    /// Set the user agent for page fetches. Empty values are ignored.
    pub fn with_user_agent(&mut self, user_agent: Option<&str>) -> &mut Self {
        match user_agent {
            Some(agent) if !agent.is_empty() => self.user_agent = agent.into(),
            _ => (),
        }
        self
    }

    /// Set the user agent sent to the search engine.
    pub fn with_browser_user_agent(&mut self, user_agent: &str) -> &mut Self {
        self.browser_user_agent = user_agent.into();
        self
    }

    /// Set the search engine results endpoint.
    pub fn with_search_url(&mut self, search_url: &str) -> &mut Self {
        self.search_url = search_url.into();
        self
    }

    /// Set the PageSpeed Insights endpoint.
    pub fn with_pagespeed_url(&mut self, pagespeed_url: &str) -> &mut Self {
        self.pagespeed_url = pagespeed_url.into();
        self
    }

    /// Set the PageSpeed strategy.
    pub fn with_strategy(&mut self, strategy: Strategy) -> &mut Self {
        self.strategy = strategy;
        self
    }

    /// Set the PageSpeed Insights API key.
    pub fn with_pagespeed_api_key(&mut self, key: Option<String>) -> &mut Self {
        self.pagespeed_api_key = key.filter(|k| !k.is_empty());
        self
    }

    /// Enable or disable the search engine indexation lookup.
    pub fn with_indexation(&mut self, indexation: bool) -> &mut Self {
        self.indexation = indexation;
        self
    }

    /// Build the http client shared by every check.
    pub fn build_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .redirect(reqwest::redirect::Policy::limited(self.redirect_limit));

        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }

        builder.build()
    }
}

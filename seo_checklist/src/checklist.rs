use crate::checks::{self, CheckContext, CheckKind};
use crate::configuration::Configuration;
use crate::error::CheckResult;
use crate::features::indexation::{GoogleSiteSearch, IndexationProvider};
use crate::features::pagespeed::PageSpeedClient;
use crate::report::{Cell, ResultTable};
use crate::utils::{log, normalize_url};
use reqwest::Client;
use strum::IntoEnumIterator;

/// Runs every check against a url, in order, into one result table.
/// ```rust,no_run
/// use seo_checklist::checklist::Checklist;
/// use seo_checklist::configuration::Configuration;
///
/// # async fn run() -> Result<(), seo_checklist::reqwest::Error> {
/// let checklist = Checklist::new(Configuration::new())?;
/// let table = checklist.run("example.com").await;
/// # Ok(())
/// # }
/// ```
pub struct Checklist {
    client: Client,
    indexation: Option<Box<dyn IndexationProvider>>,
    pagespeed: PageSpeedClient,
}

impl Checklist {
    /// A checklist with the Google indexation provider and the configured PageSpeed endpoint.
    pub fn new(config: Configuration) -> Result<Self, reqwest::Error> {
        let client = config.build_client()?;
        let indexation: Option<Box<dyn IndexationProvider>> = if config.indexation {
            Some(Box::new(GoogleSiteSearch::from_config(&config)))
        } else {
            None
        };
        let pagespeed = PageSpeedClient::from_config(&config);

        Ok(Self {
            client,
            indexation,
            pagespeed,
        })
    }

    /// Replace the indexation provider. `None` turns the lookup off.
    pub fn with_indexation_provider(
        mut self,
        provider: Option<Box<dyn IndexationProvider>>,
    ) -> Self {
        self.indexation = provider;
        self
    }

    /// Run the checklist for a url.
    pub async fn run(&self, url: &str) -> ResultTable {
        self.run_with_progress(url, |_| ()).await
    }

    /// Run the checklist for a url, calling `on_check` before each check starts.
    pub async fn run_with_progress<F>(&self, url: &str, mut on_check: F) -> ResultTable
    where
        F: FnMut(CheckKind),
    {
        let url = normalize_url(url);
        let mut table = ResultTable::new();

        for check in CheckKind::iter() {
            on_check(check);
            let cells = self.run_check(check, &url).await;
            table.record(&url, check, cells);
        }

        table
    }

    /// Run one check. Failures become an error cell.
    pub async fn run_check(&self, check: CheckKind, url: &str) -> Vec<Cell> {
        log("running check", check.name());

        match self.dispatch(check, url).await {
            Ok(cells) => {
                for cell in &cells {
                    log::info!("{} - {}", cell.column, cell.text);
                }
                cells
            }
            Err(e) => {
                log::warn!("{} check failed for {url}: {e}", check.name());
                vec![check.failure(&e)]
            }
        }
    }

    async fn dispatch(&self, check: CheckKind, url: &str) -> CheckResult<Vec<Cell>> {
        let ctx = CheckContext {
            url,
            client: &self.client,
            indexation: self.indexation.as_deref(),
            pagespeed: &self.pagespeed,
        };

        match check {
            CheckKind::MobileFriendly => checks::mobile::run(&ctx).await,
            CheckKind::BotAccessibility => checks::bots::run(&ctx).await,
            CheckKind::Indexation => checks::indexation::run(&ctx).await,
            CheckKind::RobotsMeta => checks::robots_meta::run(&ctx).await,
            CheckKind::XRobotsTag => checks::x_robots_tag::run(&ctx).await,
            CheckKind::Canonical => checks::canonical::run(&ctx).await,
            CheckKind::StructuredData => checks::structured_data::run(&ctx).await,
            CheckKind::CoreWebVitals => checks::core_web_vitals::run(&ctx).await,
        }
    }
}

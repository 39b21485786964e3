//! The checks of the SEO checklist.
//!
//! Every check is an async function taking a [`CheckContext`] and returning the
//! cells it contributes to the result table. A check never records its own
//! failure; it returns a [`CheckError`](crate::error::CheckError) and the
//! orchestrator turns it into an error cell for the check's column.

/// Crawler accessibility.
pub mod bots;
/// Canonical tag.
pub mod canonical;
/// Core Web Vitals through PageSpeed Insights.
pub mod core_web_vitals;
/// Search engine indexation.
pub mod indexation;
/// Viewport meta tag.
pub mod mobile;
/// Robots meta tag.
pub mod robots_meta;
/// Schema.org structured data.
pub mod structured_data;
/// X-Robots-Tag response header.
pub mod x_robots_tag;

use crate::features::indexation::IndexationProvider;
use crate::features::pagespeed::PageSpeedClient;
use reqwest::Client;
use serde::Serialize;

/// Everything a check needs to run against one url.
pub struct CheckContext<'a> {
    /// The normalized url audited.
    pub url: &'a str,
    /// The shared http client.
    pub client: &'a Client,
    /// The indexation capability, `None` when disabled.
    pub indexation: Option<&'a dyn IndexationProvider>,
    /// The PageSpeed Insights client.
    pub pagespeed: &'a PageSpeedClient,
}

/// The checks in the order they run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Viewport meta tag presence.
    MobileFriendly,
    /// Response status per search engine crawler.
    BotAccessibility,
    /// `site:` lookup in the search engine.
    Indexation,
    /// `<meta name="robots">` noindex.
    RobotsMeta,
    /// `X-Robots-Tag` noindex header.
    XRobotsTag,
    /// `<link rel="canonical">` pointing at the page itself.
    Canonical,
    /// JSON-LD, Microdata and RDFa types.
    StructuredData,
    /// PageSpeed Insights lab metrics.
    CoreWebVitals,
}

impl CheckKind {
    /// The name of the check used in error verdicts.
    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::MobileFriendly => "Mobile Friendly",
            CheckKind::BotAccessibility => "Bot Accessibility",
            CheckKind::Indexation => "Indexation",
            CheckKind::RobotsMeta => "No index Meta Tag",
            CheckKind::XRobotsTag => "No index Response Header",
            CheckKind::Canonical => "Canonical",
            CheckKind::StructuredData => "Schema.org",
            CheckKind::CoreWebVitals => "Core Web Vitals",
        }
    }

    /// The column recording a failure of the check.
    pub fn column(&self) -> &'static str {
        self.name()
    }

    /// The question printed before the check runs.
    pub fn heading(&self) -> &'static str {
        match self {
            CheckKind::MobileFriendly => "- Is the Page Mobile Friendly?",
            CheckKind::BotAccessibility => "- Is the page accessible for Bots?",
            CheckKind::Indexation => "- Is the Page indexed in Google?",
            CheckKind::RobotsMeta => {
                "- Indexability #1 - Does the page contain a noindex robots meta tag?"
            }
            CheckKind::XRobotsTag => {
                "- Indexability #2 - Does the page send the response header X-Robots-Tag: noindex?"
            }
            CheckKind::Canonical => "- Indexability #3 - Is the page self canonical?",
            CheckKind::StructuredData => "- Schema.org Check -",
            CheckKind::CoreWebVitals => "- Core Web Vitals Performance score:",
        }
    }

    /// The error cell recorded when the check fails.
    pub fn failure(&self, error: &crate::error::CheckError) -> crate::report::Cell {
        crate::report::Cell::error(
            self.column(),
            format!("{} Check failed with error: {error} 🚫", self.name()),
        )
    }
}

#![warn(missing_docs)]

//! On-page SEO checklist for a single URL.
//!
//! The checklist fetches one page (and two third-party services, a search
//! engine results page and the PageSpeed Insights API) and records a verdict
//! for a fixed set of signals:
//!
//! - mobile friendliness (viewport meta tag)
//! - accessibility for the major search engine crawlers
//! - indexation status in the search engine
//! - the robots meta tag and the `X-Robots-Tag` response header
//! - the canonical tag
//! - schema.org structured data (JSON-LD, Microdata, RDFa)
//! - Core Web Vitals
//!
//! # Basic usage
//!
//! ```rust,no_run
//! use seo_checklist::checklist::Checklist;
//! use seo_checklist::configuration::Configuration;
//!
//! # async fn run() {
//! let checklist = Checklist::new(Configuration::new()).expect("http client");
//! let table = checklist.run("example.com").await;
//!
//! for cell in table.cells() {
//!     println!("{}: {}", cell.column, cell.text);
//! }
//! # }
//! ```

extern crate log;
pub extern crate reqwest;
pub extern crate tokio;
#[macro_use]
extern crate lazy_static;

/// The individual checks.
pub mod checks;
/// The checklist orchestrator.
pub mod checklist;
/// Configuration structure for `Checklist`.
pub mod configuration;
/// Error types.
pub mod error;
/// Spreadsheet export of the result table.
pub mod export;
/// Third-party capabilities: search engine indexation and page speed.
pub mod features;
/// A page fetched.
pub mod page;
/// The result table and verdicts.
pub mod report;
/// Application utils.
pub mod utils;

pub use reqwest::{header, Client, ClientBuilder, StatusCode};

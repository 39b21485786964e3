//! PageSpeed Insights client.
//!
//! Runs a Lighthouse analysis of a url through the PageSpeed Insights v5 API
//! and exposes the lab audits used for Core Web Vitals.

use crate::configuration::{Configuration, Strategy};
use crate::error::{CheckError, CheckResult};
use crate::utils::excerpt;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::collections::HashMap;

/// One Lighthouse audit.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    /// Human readable value, e.g. `2.1 s`.
    #[serde(default)]
    pub display_value: Option<String>,
    /// Raw value in the audit's unit.
    #[serde(default)]
    pub numeric_value: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LighthouseResult {
    #[serde(default)]
    audits: HashMap<String, Audit>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageSpeedResponse {
    lighthouse_result: Option<LighthouseResult>,
}

/// The audits of one analysis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSpeedReport {
    audits: HashMap<String, Audit>,
}

impl PageSpeedReport {
    /// Decode the API response body.
    pub fn from_json(body: &str) -> CheckResult<Self> {
        let response: PageSpeedResponse = serde_json::from_str(body)?;
        let lighthouse = response
            .lighthouse_result
            .ok_or(CheckError::MissingField("lighthouseResult"))?;

        Ok(Self {
            audits: lighthouse.audits,
        })
    }

    /// An audit by id, e.g. `largest-contentful-paint`.
    pub fn audit(&self, id: &str) -> Option<&Audit> {
        self.audits.get(id)
    }
}

/// Client for the PageSpeed Insights API.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSpeedClient {
    endpoint: String,
    strategy: Strategy,
    api_key: Option<String>,
}

impl PageSpeedClient {
    /// A client for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            strategy: Strategy::default(),
            api_key: None,
        }
    }

    /// A client set up from the run configuration.
    pub fn from_config(config: &Configuration) -> Self {
        Self::new(config.pagespeed_url.as_str())
            .with_strategy(config.strategy)
            .with_api_key(config.pagespeed_api_key.clone())
    }

    /// Set the analysis strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    /// The strategy requested.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Run the analysis of a url.
    pub async fn analyze(&self, client: &Client, url: &str) -> CheckResult<PageSpeedReport> {
        let strategy = self.strategy.to_string();
        let mut query = vec![("url", url), ("strategy", strategy.as_str())];

        if let Some(ref key) = self.api_key {
            query.push(("key", key.as_str()));
        }

        let res = client.get(&self.endpoint).query(&query).send().await?;
        let status = res.status();
        let body = res.text().await?;

        if status != StatusCode::OK {
            log::warn!("Error {}: {}", status.as_u16(), body);

            return Err(CheckError::Status {
                status: status.as_u16(),
                body: excerpt(&body, 200),
            });
        }

        PageSpeedReport::from_json(&body)
    }
}

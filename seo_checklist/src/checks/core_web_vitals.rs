use super::CheckContext;
use crate::error::{CheckError, CheckResult};
use crate::features::pagespeed::PageSpeedReport;
use crate::report::{Cell, Verdict};

/// Rating of a metric value against its thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Rating {
    /// Below the first threshold.
    #[strum(serialize = "good ✅")]
    Good,
    /// Between both thresholds, inclusive.
    #[strum(serialize = "needs improvement ⚠️")]
    NeedsImprovement,
    /// Above the second threshold.
    #[strum(serialize = "poor ❌")]
    Poor,
    /// Not a number.
    #[strum(serialize = "invalid input")]
    Invalid,
}

impl Rating {
    /// The verdict carried by the rating.
    pub fn verdict(&self) -> Verdict {
        match self {
            Rating::Good => Verdict::Pass,
            Rating::NeedsImprovement => Verdict::Warn,
            Rating::Poor => Verdict::Fail,
            Rating::Invalid => Verdict::Error,
        }
    }
}

/// Rate a value. Both thresholds belong to the middle band.
pub fn classify(value: f64, good_below: f64, poor_above: f64) -> Rating {
    if value < good_below {
        Rating::Good
    } else if value >= good_below && value <= poor_above {
        Rating::NeedsImprovement
    } else if value > poor_above {
        Rating::Poor
    } else {
        Rating::Invalid
    }
}

/// The lab metrics reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Metric {
    /// Largest Contentful Paint, milliseconds.
    LargestContentfulPaint,
    /// Cumulative Layout Shift, unitless.
    CumulativeLayoutShift,
    /// Speed Index, milliseconds.
    SpeedIndex,
    /// First Contentful Paint, milliseconds.
    FirstContentfulPaint,
    /// Total Blocking Time, milliseconds.
    TotalBlockingTime,
}

impl Metric {
    /// The Lighthouse audit id.
    pub fn audit_id(&self) -> &'static str {
        match self {
            Metric::LargestContentfulPaint => "largest-contentful-paint",
            Metric::CumulativeLayoutShift => "cumulative-layout-shift",
            Metric::SpeedIndex => "speed-index",
            Metric::FirstContentfulPaint => "first-contentful-paint",
            Metric::TotalBlockingTime => "total-blocking-time",
        }
    }

    /// Column holding the display value.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::LargestContentfulPaint => "Largest Contentful Paint",
            Metric::CumulativeLayoutShift => "Cumulative Layout Shift",
            Metric::SpeedIndex => "Speed Index",
            Metric::FirstContentfulPaint => "First Contentful Paint",
            Metric::TotalBlockingTime => "Total Blocking Time",
        }
    }

    /// Column holding the rating.
    pub fn result_label(&self) -> &'static str {
        match self {
            Metric::LargestContentfulPaint => "LCP Result",
            Metric::CumulativeLayoutShift => "CLS Results",
            Metric::SpeedIndex => "SI Result",
            Metric::FirstContentfulPaint => "FCP Result",
            Metric::TotalBlockingTime => "TBT Result",
        }
    }

    /// The (good below, poor above) thresholds.
    pub fn thresholds(&self) -> (f64, f64) {
        match self {
            Metric::LargestContentfulPaint => (2500.0, 4000.0),
            Metric::CumulativeLayoutShift => (0.1, 0.25),
            Metric::SpeedIndex => (3400.0, 5800.0),
            Metric::FirstContentfulPaint => (1800.0, 3000.0),
            Metric::TotalBlockingTime => (200.0, 600.0),
        }
    }

    /// Rate a value of this metric.
    pub fn classify(&self, value: f64) -> Rating {
        let (good_below, poor_above) = self.thresholds();
        classify(value, good_below, poor_above)
    }
}

/// A metric read from an analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricReading {
    /// The metric.
    pub metric: Metric,
    /// Human readable value.
    pub display_value: String,
    /// Raw value.
    pub numeric_value: f64,
    /// The rating of the raw value.
    pub rating: Rating,
}

impl MetricReading {
    /// The display and rating cells.
    pub fn cells(&self) -> [Cell; 2] {
        let verdict = self.rating.verdict();

        [
            Cell::new(self.metric.label(), verdict, self.display_value.as_str()),
            Cell::new(self.metric.result_label(), verdict, self.rating.to_string()),
        ]
    }
}

/// Read and rate every metric. A missing audit or value fails the whole reading.
pub fn readings(report: &PageSpeedReport) -> CheckResult<Vec<MetricReading>> {
    use strum::IntoEnumIterator;

    Metric::iter()
        .map(|metric| -> CheckResult<MetricReading> {
            let audit = report
                .audit(metric.audit_id())
                .ok_or(CheckError::MissingField("lighthouseResult.audits"))?;
            let numeric_value = audit
                .numeric_value
                .ok_or(CheckError::MissingField("numericValue"))?;
            let display_value = audit
                .display_value
                .clone()
                .ok_or(CheckError::MissingField("displayValue"))?;

            Ok(MetricReading {
                metric,
                display_value,
                numeric_value,
                rating: metric.classify(numeric_value),
            })
        })
        .collect()
}

/// Analyze the url with PageSpeed Insights and rate the lab metrics.
pub async fn run(ctx: &CheckContext<'_>) -> CheckResult<Vec<Cell>> {
    let report = ctx.pagespeed.analyze(ctx.client, ctx.url).await?;
    let readings = readings(&report)?;

    log::debug!("{} strategy analysis of {}", ctx.pagespeed.strategy(), ctx.url);

    Ok(readings.iter().flat_map(|r| r.cells()).collect())
}

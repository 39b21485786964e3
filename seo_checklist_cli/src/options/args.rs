use clap::Parser;
use seo_checklist::configuration::Strategy;
use seo_checklist::export::DEFAULT_OUTPUT;

/// program to audit a web page against an on-page SEO checklist.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// The page URL to check. Prompted for when omitted.
    #[clap(short, long)]
    pub url: Option<String>,
    /// The spreadsheet to write.
    #[clap(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,
    /// Timeout for each request in seconds. 0 disables the timeout.
    #[clap(short, long, default_value_t = 30)]
    pub timeout: u64,
    /// PageSpeed Insights strategy: mobile or desktop.
    #[clap(short, long, default_value = "mobile")]
    pub strategy: Strategy,
    /// PageSpeed Insights API key.
    #[clap(long, env = "PAGESPEED_API_KEY", hide_env_values = true)]
    pub pagespeed_key: Option<String>,
    /// User-Agent for plain page fetches.
    #[clap(long)]
    pub user_agent: Option<String>,
    /// User-Agent sent to the search engine results page.
    #[clap(long)]
    pub search_user_agent: Option<String>,
    /// Maximum redirects followed per request.
    #[clap(long, default_value_t = 10)]
    pub redirect_limit: usize,
    /// Skip the search engine indexation lookup.
    #[clap(long)]
    pub no_indexation: bool,
    /// Print the results as JSON.
    #[clap(long)]
    pub json: bool,
    /// Log check progress on standard error.
    #[clap(short, long)]
    pub verbose: bool,
}

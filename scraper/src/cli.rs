use crate::config::{ScraperConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use std::path::PathBuf;
use std::time::Duration;
use structopt::StructOpt;

/// Scrape job listings and compare salaries across locations.
/// Query and locations are prompted for when not given.
#[derive(StructOpt, Debug)]
#[structopt(name = "salary-scraper")]
pub struct Cli {
    /// Search query, e.g. "data analyst"
    #[structopt(short, long)]
    pub query: Option<String>,

    /// Comma-separated locations, e.g. "Boston, Chicago"
    #[structopt(short, long)]
    pub locations: Option<String>,

    /// Result pages to fetch per location
    #[structopt(short, long, default_value = "5")]
    pub pages: usize,

    /// JSON file receiving every scraped listing
    #[structopt(short, long, default_value = "all_jobs.json", parse(from_os_str))]
    pub output: PathBuf,

    /// Seconds to wait after each request
    #[structopt(long, default_value = "2")]
    pub delay_secs: u64,

    /// User-Agent header sent with every request
    #[structopt(long)]
    pub user_agent: Option<String>,

    /// Search endpoint
    #[structopt(long)]
    pub base_url: Option<String>,
}

impl Cli {
    pub fn to_config(&self) -> ScraperConfig {
        ScraperConfig {
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            user_agent: self
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            request_delay: Duration::from_secs(self.delay_secs),
            page_count: self.pages,
            output_path: self.output.clone(),
        }
    }
}

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.indeed.com/jobs";

/// Desktop browser user agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(2);
pub const DEFAULT_PAGE_COUNT: usize = 5;
pub const DEFAULT_OUTPUT_PATH: &str = "all_jobs.json";

/// Results per page on the search site; `start` advances by this much.
pub const RESULTS_PER_PAGE: usize = 10;

/// Tunables for a scraping run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScraperConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Pause after every request, successful or not.
    pub request_delay: Duration,
    pub page_count: usize,
    pub output_path: PathBuf,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_delay: DEFAULT_REQUEST_DELAY,
            page_count: DEFAULT_PAGE_COUNT,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

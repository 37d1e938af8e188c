use crate::config::{ScraperConfig, RESULTS_PER_PAGE};
use crate::error::{Result, ScrapeError};
use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::StatusCode;
use std::thread;
use std::time::Duration;

/// Anything that can hand back the raw markup of one search results page.
pub trait PageSource {
    /// `page` is zero-based.
    fn fetch_page(&self, query: &str, location: &str, page: usize) -> Result<String>;
}

impl<T: PageSource + ?Sized> PageSource for &T {
    fn fetch_page(&self, query: &str, location: &str, page: usize) -> Result<String> {
        (**self).fetch_page(query, location, page)
    }
}

/// Fetches result pages over HTTP, one blocking GET at a time.
pub struct HttpFetcher {
    client: Client,
    base_url: String,
    request_delay: Duration,
}

impl HttpFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| ScrapeError::Input(format!("user agent: {e}")))?;
        headers.insert(USER_AGENT, user_agent);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            request_delay: config.request_delay,
        })
    }

    fn request(&self, query: &str, location: &str, page: usize) -> Result<String> {
        let start = (page * RESULTS_PER_PAGE).to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("l", location), ("start", start.as_str())])
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ScrapeError::Status {
                status: status.as_u16(),
                page: page + 1,
            });
        }

        let body = response.text()?;
        debug!("Fetched {} bytes for page {} ({})", body.len(), page + 1, location);
        Ok(body)
    }
}

impl PageSource for HttpFetcher {
    fn fetch_page(&self, query: &str, location: &str, page: usize) -> Result<String> {
        let result = self.request(query, location, page);
        // Rate limit applies whether or not the request succeeded
        if !self.request_delay.is_zero() {
            thread::sleep(self.request_delay);
        }
        result
    }
}

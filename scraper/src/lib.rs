//! Job listing salary scraper.
//!
//! Fetches search result pages, pulls the listing cards out of them,
//! turns salary text into yearly figures and summarizes them per location.

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod logger;
pub mod pipeline;
pub mod prompt;
pub mod report;
pub mod salary;
pub mod stats;
pub mod writer;

pub use config::ScraperConfig;
pub use error::{Result, ScrapeError};
pub use extractor::{ListingExtractor, MetadataFields};
pub use fetcher::{HttpFetcher, PageSource};
pub use pipeline::{LocationHarvest, SalaryComparison, SalaryPipeline};
pub use salary::{normalize_salary, WorkSchedule};

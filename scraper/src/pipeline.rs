use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::extractor::ListingExtractor;
use crate::fetcher::PageSource;
use crate::report::render_report;
use crate::salary::normalize_salary;
use crate::stats::location_report;
use crate::writer::save_to_json;
use common::{ListingRecord, LocationReport};
use log::{error, info, warn};

/// Listings and usable salary estimates gathered for one location.
#[derive(Debug, Default)]
pub struct LocationHarvest {
    pub records: Vec<ListingRecord>,
    pub estimates: Vec<i64>,
}

/// Outcome of scraping every requested location.
#[derive(Debug, Default)]
pub struct SalaryComparison {
    pub records: Vec<ListingRecord>,
    /// One entry per location, in the order they were requested.
    pub reports: Vec<(String, LocationReport)>,
}

/// Yearly estimates for the records whose salary text could be read.
/// Zero estimates are dropped along with unparsable ones.
pub fn estimate_salaries(records: &[ListingRecord]) -> Vec<i64> {
    records
        .iter()
        .filter_map(|record| normalize_salary(&record.salary_text, record.schedule()))
        .filter(|&estimate| estimate > 0)
        .collect()
}

pub struct SalaryPipeline<S> {
    source: S,
    extractor: ListingExtractor,
}

impl<S: PageSource> SalaryPipeline<S> {
    pub fn new(source: S) -> Result<Self> {
        Ok(Self {
            source,
            extractor: ListingExtractor::new()?,
        })
    }

    /// Fetches `pages` result pages for one location. Failed pages are
    /// logged and skipped.
    pub fn scrape_location(&self, query: &str, location: &str, pages: usize) -> LocationHarvest {
        let mut harvest = LocationHarvest::default();

        for page in 0..pages {
            info!("Scraping page {} for location: {}", page + 1, location);

            let html = match self.source.fetch_page(query, location, page) {
                Ok(html) => html,
                Err(e @ ScrapeError::Status { .. }) => {
                    warn!("{} ({})", e, location);
                    continue;
                }
                Err(e) => {
                    warn!("Failed to retrieve page {} for {}: {}", page + 1, location, e);
                    continue;
                }
            };

            let records = self.extractor.extract_listings_from_html(&html);
            let estimates = estimate_salaries(&records);
            info!(
                "Page {}: {} listings, {} with a usable salary",
                page + 1,
                records.len(),
                estimates.len()
            );

            harvest.records.extend(records);
            harvest.estimates.extend(estimates);
        }

        harvest
    }

    /// Runs every location in turn and summarizes each one's salaries.
    pub fn compare_locations(&self, query: &str, locations: &[String], pages: usize) -> SalaryComparison {
        let mut comparison = SalaryComparison::default();

        for location in locations {
            let harvest = self.scrape_location(query, location, pages);
            comparison.records.extend(harvest.records);
            comparison
                .reports
                .push((location.clone(), location_report(&harvest.estimates)));
        }

        comparison
    }

    /// Compares locations, saves every listing to the configured JSON file
    /// and prints the salary summary. A failed save does not stop the run.
    pub fn run(&self, query: &str, locations: &[String], config: &ScraperConfig) -> SalaryComparison {
        let comparison = self.compare_locations(query, locations, config.page_count);

        match save_to_json(&comparison.records, &config.output_path) {
            Ok(()) => info!(
                "Job data successfully saved to {} ({} listings)",
                config.output_path.display(),
                comparison.records.len()
            ),
            Err(e) => error!("Error saving JSON file {}: {}", config.output_path.display(), e),
        }

        print!("{}", render_report(&comparison.reports));
        comparison
    }
}

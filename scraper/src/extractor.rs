//! Listing card extraction from a search results page.
//!
//! Every lookup is tied to the class names the site currently uses. When
//! the markup changes the affected fields fall back to `"N/A"` instead of
//! failing the page.

use crate::error::{Result, ScrapeError};
use common::{ListingRecord, NOT_AVAILABLE};
use scraper::{ElementRef, Html, Selector};

const CARD_SELECTOR: &str = "td.resultContent";
const TITLE_SELECTOR: &str = "h2.jobTitle";
const COMPANY_SELECTOR: &str = "span.css-63koeb";
const LOCATION_SELECTOR: &str = "div.css-1p0sjhy";
const SALARY_SELECTOR: &str = "div.salary-snippet-container";
const METADATA_SELECTOR: &str = "div.css-1cvvo1b";

/// Job type and schedule, read positionally from the card's metadata nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataFields {
    pub job_type: String,
    pub schedule: String,
}

impl MetadataFields {
    /// The second metadata node holds the job type and the third the schedule.
    /// The first one is not used.
    pub fn from_nodes(nodes: &[String]) -> Self {
        let at = |index: usize| {
            nodes
                .get(index)
                .cloned()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };
        Self {
            job_type: at(1),
            schedule: at(2),
        }
    }
}

pub struct ListingExtractor {
    card: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    salary: Selector,
    metadata: Selector,
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector(format!("{selector}: {e}")))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

impl ListingExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            card: parse_selector(CARD_SELECTOR)?,
            title: parse_selector(TITLE_SELECTOR)?,
            company: parse_selector(COMPANY_SELECTOR)?,
            location: parse_selector(LOCATION_SELECTOR)?,
            salary: parse_selector(SALARY_SELECTOR)?,
            metadata: parse_selector(METADATA_SELECTOR)?,
        })
    }

    /// One record per listing card, in document order.
    pub fn extract_listings(&self, document: &Html) -> Vec<ListingRecord> {
        document
            .select(&self.card)
            .map(|card| self.extract_record(card))
            .collect()
    }

    pub fn extract_listings_from_html(&self, html: &str) -> Vec<ListingRecord> {
        let document = Html::parse_document(html);
        self.extract_listings(&document)
    }

    fn extract_record(&self, card: ElementRef<'_>) -> ListingRecord {
        let metadata_nodes: Vec<String> = card.select(&self.metadata).map(element_text).collect();
        let MetadataFields { job_type, schedule } = MetadataFields::from_nodes(&metadata_nodes);

        ListingRecord {
            title: self.first_text(card, &self.title),
            company: self.first_text(card, &self.company),
            location: self.first_text(card, &self.location),
            salary_text: self.first_text(card, &self.salary),
            job_type,
            schedule,
        }
    }

    fn first_text(&self, card: ElementRef<'_>, selector: &Selector) -> String {
        card.select(selector)
            .next()
            .map(element_text)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

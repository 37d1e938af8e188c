use serde::{Deserialize, Serialize};

/// Placeholder stored in any listing field the page markup did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Yearly-equivalent salary, `None` when the text could not be read with confidence.
pub type SalaryEstimate = Option<i64>;

/// One job card as scraped from a search results page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ListingRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "salary")]
    pub salary_text: String,
    pub job_type: String,
    pub schedule: String,
}

impl ListingRecord {
    /// Returns the schedule text, or `None` when it is the placeholder.
    pub fn schedule(&self) -> Option<&str> {
        non_placeholder(&self.schedule)
    }
}

impl Default for ListingRecord {
    fn default() -> Self {
        Self {
            title: NOT_AVAILABLE.to_string(),
            company: NOT_AVAILABLE.to_string(),
            location: NOT_AVAILABLE.to_string(),
            salary_text: NOT_AVAILABLE.to_string(),
            job_type: NOT_AVAILABLE.to_string(),
            schedule: NOT_AVAILABLE.to_string(),
        }
    }
}

/// Treats empty text and the placeholder as missing.
pub fn non_placeholder(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed == NOT_AVAILABLE {
        None
    } else {
        Some(trimmed)
    }
}

/// Salary figures for one searched location.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LocationStats {
    pub average_salary: f64,
    pub max_salary: i64,
    pub min_salary: i64,
    pub sample_count: usize,
}

/// Per-location outcome of the salary comparison.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum LocationReport {
    Stats(LocationStats),
    NoData,
}

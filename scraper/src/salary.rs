//! Salary text normalization.
//!
//! Turns free-text salary snippets ("$80,000 - $100,000 a year",
//! "$25 an hour", "From $70,000 a year") into a single yearly figure.
//! Only three shapes are accepted: a two-amount range, a single annual
//! amount, and a single hourly rate with a known schedule. Anything else
//! is reported as `None` rather than guessed.
//!
//! Hourly ranges ("$20 - $25 an hour") are not annualized and yield `None`.

use common::{non_placeholder, SalaryEstimate};
use regex::Regex;

/// 40 hours/week * 52 weeks/year
pub const FULL_TIME_HOURS_PER_YEAR: i64 = 40 * 52;
/// 20 hours/week * 52 weeks/year
pub const PART_TIME_HOURS_PER_YEAR: i64 = 20 * 52;

/// Work schedule as far as annualizing an hourly rate is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkSchedule {
    FullTime,
    PartTime,
}

impl WorkSchedule {
    /// Classifies schedule text such as "Full-time" or "Part-time".
    /// "full" wins when both words appear.
    pub fn from_text(schedule: &str) -> Option<Self> {
        let lower = schedule.to_lowercase();
        if lower.contains("full") {
            Some(Self::FullTime)
        } else if lower.contains("part") {
            Some(Self::PartTime)
        } else {
            None
        }
    }

    pub fn hours_per_year(self) -> i64 {
        match self {
            Self::FullTime => FULL_TIME_HOURS_PER_YEAR,
            Self::PartTime => PART_TIME_HOURS_PER_YEAR,
        }
    }
}

/// Extracts every `$`-prefixed amount, left to right, with commas removed.
/// Returns `None` if an amount does not fit in an `i64`.
pub fn extract_amounts(salary_text: &str) -> Option<Vec<i64>> {
    // A dollar sign followed by digits, optionally comma-grouped ("$120,000")
    let re = Regex::new(r"\$(\d[\d,]*)").ok()?;

    re.captures_iter(salary_text)
        .filter_map(|cap| cap.get(1))
        .map(|matched| {
            let clean_number: String = matched
                .as_str()
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            clean_number.parse::<i64>().ok()
        })
        .collect()
}

/// Converts salary text into a yearly-equivalent estimate.
///
/// `schedule` is only consulted for hourly text; pass `None` when the
/// listing has no schedule.
pub fn normalize_salary(salary_text: &str, schedule: Option<&str>) -> SalaryEstimate {
    let text = non_placeholder(salary_text)?;
    let amounts = extract_amounts(text)?;

    if text.to_lowercase().contains("hour") {
        let hours = WorkSchedule::from_text(schedule?)?.hours_per_year();
        return match amounts.as_slice() {
            [rate] => rate.checked_mul(hours),
            _ => None,
        };
    }

    match amounts.as_slice() {
        [low, high] => low.checked_add(*high).map(|sum| sum / 2),
        [single] => Some(*single),
        _ => None,
    }
}

use common::{LocationReport, LocationStats};

/// Average, extremes and count over one location's salary estimates.
/// Returns `None` for an empty set.
pub fn compute_stats(estimates: &[i64]) -> Option<LocationStats> {
    let max_salary = *estimates.iter().max()?;
    let min_salary = *estimates.iter().min()?;
    let total: f64 = estimates.iter().map(|&v| v as f64).sum();

    Some(LocationStats {
        average_salary: total / estimates.len() as f64,
        max_salary,
        min_salary,
        sample_count: estimates.len(),
    })
}

pub fn location_report(estimates: &[i64]) -> LocationReport {
    compute_stats(estimates).map_or(LocationReport::NoData, LocationReport::Stats)
}

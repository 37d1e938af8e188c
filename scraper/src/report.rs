use common::LocationReport;
use std::fmt::Write;

/// Formats an amount as US currency with thousands separators, e.g. `$90,000.00`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u128;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

/// Renders the per-location salary summary printed at the end of a run.
pub fn render_report(reports: &[(String, LocationReport)]) -> String {
    let mut out = String::from("\n--- Salary Analysis Across Locations ---\n");

    for (location, report) in reports {
        // Writing into a String cannot fail
        let _ = writeln!(out, "\nLocation: {location}");
        match report {
            LocationReport::Stats(stats) => {
                let _ = writeln!(out, "Average Salary: {}", format_currency(stats.average_salary));
                let _ = writeln!(out, "Highest Salary: {}", format_currency(stats.max_salary as f64));
                let _ = writeln!(out, "Lowest Salary: {}", format_currency(stats.min_salary as f64));
                let _ = writeln!(out, "Total Salaries Analyzed: {}", stats.sample_count);
            }
            LocationReport::NoData => {
                out.push_str("No salary data available.\n");
            }
        }
    }

    out
}

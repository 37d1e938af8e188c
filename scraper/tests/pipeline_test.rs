use common::{LocationReport, NOT_AVAILABLE};
use salary_scraper::{HttpFetcher, PageSource, Result, SalaryPipeline, ScrapeError, ScraperConfig};
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;
use tempfile::tempdir;

/// Serves canned pages keyed by (location, page); anything else is a 503.
#[derive(Default)]
struct FakeSource {
    pages: HashMap<(String, usize), String>,
    calls: RefCell<Vec<(String, String, usize)>>,
}

impl FakeSource {
    fn with_page(mut self, location: &str, page: usize, html: String) -> Self {
        self.pages.insert((location.to_string(), page), html);
        self
    }
}

impl PageSource for FakeSource {
    fn fetch_page(&self, query: &str, location: &str, page: usize) -> Result<String> {
        self.calls
            .borrow_mut()
            .push((query.to_string(), location.to_string(), page));
        self.pages
            .get(&(location.to_string(), page))
            .cloned()
            .ok_or(ScrapeError::Status { status: 503, page: page + 1 })
    }
}

fn card(title: &str, salary: Option<&str>, schedule: Option<&str>) -> String {
    let salary = salary
        .map(|s| format!(r#"<div class="salary-snippet-container">{s}</div>"#))
        .unwrap_or_default();
    let metadata = schedule
        .map(|s| {
            format!(
                r#"<div class="css-1cvvo1b">Pay</div><div class="css-1cvvo1b">Permanent</div><div class="css-1cvvo1b">{s}</div>"#
            )
        })
        .unwrap_or_default();
    format!(
        r#"<td class="resultContent"><h2 class="jobTitle">{title}</h2><span class="css-63koeb">Acme</span><div class="css-1p0sjhy">Springfield</div>{salary}{metadata}</td>"#
    )
}

fn page(cards: &[String]) -> String {
    format!("<html><body><table><tr>{}</tr></table></body></html>", cards.concat())
}

#[test]
fn test_single_card_end_to_end() {
    let source = FakeSource::default().with_page(
        "Austin",
        0,
        page(&[card("Engineer", Some("$80,000 - $100,000 a year"), Some("Full-time"))]),
    );
    let pipeline = SalaryPipeline::new(source).unwrap();

    let harvest = pipeline.scrape_location("engineer", "Austin", 1);

    assert_eq!(harvest.records.len(), 1);
    let record = &harvest.records[0];
    assert_eq!(record.title, "Engineer");
    assert_eq!(record.salary_text, "$80,000 - $100,000 a year");
    assert_eq!(record.schedule, "Full-time");
    assert_eq!(harvest.estimates, vec![90000]);
}

#[test]
fn test_location_without_salaries_is_no_data() {
    let source = FakeSource::default()
        .with_page("Austin", 0, page(&[card("Engineer", Some("$90,000 a year"), None)]))
        .with_page(
            "Denver",
            0,
            page(&[
                card("Barista", None, Some("Part-time")),
                card("Tutor", Some("$30 an hour"), None),
            ]),
        );
    let pipeline = SalaryPipeline::new(source).unwrap();
    let locations = vec!["Austin".to_string(), "Denver".to_string()];

    let comparison = pipeline.compare_locations("any", &locations, 1);

    assert_eq!(comparison.records.len(), 3);
    assert_eq!(comparison.reports.len(), 2);
    assert_eq!(comparison.reports[0].0, "Austin");
    match &comparison.reports[0].1 {
        LocationReport::Stats(stats) => {
            assert_eq!(stats.average_salary, 90000.0);
            assert_eq!(stats.sample_count, 1);
        }
        LocationReport::NoData => panic!("Austin should have data"),
    }
    assert_eq!(comparison.reports[1], ("Denver".to_string(), LocationReport::NoData));
    assert_eq!(comparison.records[2].schedule, NOT_AVAILABLE);
}

#[test]
fn test_failed_pages_are_skipped() {
    let source = FakeSource::default()
        .with_page("Boston", 0, page(&[card("Nurse", Some("$70,000 - $80,000 a year"), None)]))
        .with_page("Boston", 2, page(&[card("Medic", Some("$25 an hour"), Some("Full-time"))]));
    let pipeline = SalaryPipeline::new(source).unwrap();

    let harvest = pipeline.scrape_location("health", "Boston", 3);

    let titles: Vec<&str> = harvest.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Nurse", "Medic"]);
    assert_eq!(harvest.estimates, vec![75000, 52000]);
}

#[test]
fn test_every_page_is_requested_in_order() {
    let source = FakeSource::default();
    let pipeline = SalaryPipeline::new(&source).unwrap();
    let locations = vec!["A".to_string(), "B".to_string()];

    let comparison = pipeline.compare_locations("q", &locations, 2);

    assert!(comparison.records.is_empty());
    assert!(comparison
        .reports
        .iter()
        .all(|(_, report)| *report == LocationReport::NoData));
    assert_eq!(
        *source.calls.borrow(),
        vec![
            ("q".to_string(), "A".to_string(), 0),
            ("q".to_string(), "A".to_string(), 1),
            ("q".to_string(), "B".to_string(), 0),
            ("q".to_string(), "B".to_string(), 1),
        ]
    );
}

#[test]
fn test_run_writes_json_and_returns_comparison() {
    let dir = tempdir().unwrap();
    let config = ScraperConfig {
        output_path: dir.path().join("all_jobs.json"),
        page_count: 1,
        request_delay: Duration::ZERO,
        ..ScraperConfig::default()
    };
    let source = FakeSource::default().with_page(
        "Austin",
        0,
        page(&[
            card("Engineer", Some("$80,000 - $100,000 a year"), Some("Full-time")),
            card("Intern", None, None),
        ]),
    );
    let pipeline = SalaryPipeline::new(source).unwrap();

    let comparison = pipeline.run("engineer", &["Austin".to_string()], &config);

    assert_eq!(comparison.records.len(), 2);
    let written = std::fs::read_to_string(&config.output_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["title"], "Engineer");
    assert_eq!(items[0]["salary"], "$80,000 - $100,000 a year");
    assert_eq!(items[1]["salary"], "N/A");
    assert_eq!(items[1]["job_type"], "N/A");
}

#[test]
fn test_run_survives_unwritable_output() {
    let dir = tempdir().unwrap();
    let config = ScraperConfig {
        // Writing to a directory path fails
        output_path: dir.path().to_path_buf(),
        page_count: 1,
        request_delay: Duration::ZERO,
        ..ScraperConfig::default()
    };
    let source = FakeSource::default().with_page("Austin", 0, page(&[card("Engineer", None, None)]));
    let pipeline = SalaryPipeline::new(source).unwrap();

    let comparison = pipeline.run("engineer", &["Austin".to_string()], &config);

    assert_eq!(comparison.records.len(), 1);
    assert_eq!(comparison.reports[0].1, LocationReport::NoData);
}

#[test]
fn test_http_fetcher_through_pipeline() {
    let mut server = mockito::Server::new();
    let config = ScraperConfig {
        base_url: format!("{}/jobs", server.url()),
        request_delay: Duration::ZERO,
        ..ScraperConfig::default()
    };
    let first = server
        .mock("GET", "/jobs")
        .match_query(mockito::Matcher::UrlEncoded("start".into(), "0".into()))
        .with_status(200)
        .with_body(page(&[card("Engineer", Some("$60,000 a year"), Some("Full-time"))]))
        .create();
    let second = server
        .mock("GET", "/jobs")
        .match_query(mockito::Matcher::UrlEncoded("start".into(), "10".into()))
        .with_status(500)
        .create();

    let pipeline = SalaryPipeline::new(HttpFetcher::new(&config).unwrap()).unwrap();
    let harvest = pipeline.scrape_location("engineer", "Remote", 2);

    assert_eq!(harvest.records.len(), 1);
    assert_eq!(harvest.estimates, vec![60000]);
    first.assert();
    second.assert();
}

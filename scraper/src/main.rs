//! Listing salary scraper
//!
//! Asks for a search query and a list of locations (unless given as flags),
//! scrapes a few result pages per location, saves every listing to JSON
//! and prints a salary comparison.

use log::{error, info};
use salary_scraper::cli::Cli;
use salary_scraper::prompt::{parse_locations, prompt_line};
use salary_scraper::{logger, HttpFetcher, Result, SalaryPipeline, ScrapeError};
use std::io;
use structopt::StructOpt;

fn resolve_inputs(cli: &Cli) -> Result<(String, Vec<String>)> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let query = match &cli.query {
        Some(query) => query.trim().to_string(),
        None => prompt_line(&mut input, &mut output, "Enter your search query: ")?,
    };
    let raw_locations = match &cli.locations {
        Some(locations) => locations.clone(),
        None => prompt_line(
            &mut input,
            &mut output,
            "Enter multiple locations separated by commas: ",
        )?,
    };

    let locations = parse_locations(&raw_locations);
    if query.is_empty() {
        return Err(ScrapeError::Input("search query is empty".to_string()));
    }
    if locations.is_empty() {
        return Err(ScrapeError::Input("no locations given".to_string()));
    }
    Ok((query, locations))
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.to_config();
    let (query, locations) = resolve_inputs(cli)?;

    info!(
        "Searching {:?} in {} location(s), {} page(s) each",
        query,
        locations.len(),
        config.page_count
    );

    let pipeline = SalaryPipeline::new(HttpFetcher::new(&config)?)?;
    pipeline.run(&query, &locations, &config);
    Ok(())
}

fn main() {
    logger::init();
    let cli = Cli::from_args();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

//! HeadHunter / SuperJob salary collector
//!
//! Searches both job boards for a list of programming languages, estimates
//! an average advertised salary in rubles for each one and prints a table
//! per board.

mod aggregator;
mod cli;
mod config;
mod driver;
mod error;
mod http;
mod logger;
mod providers;
mod report;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::cli::Cli;
use crate::driver::Driver;
use crate::providers::{HeadHunter, SuperJob, VacancySource};

fn main() -> anyhow::Result<()> {
    // SUPERJOB_SECRET_KEY may come from a local .env file
    dotenvy::dotenv().ok();
    logger::init();

    let config = Cli::parse().into_config();
    info!(
        languages = config.languages.len(),
        area = config.area.as_deref().unwrap_or("-"),
        "Starting salary collection"
    );

    let client = http::build_client(&config).context("failed to build HTTP client")?;
    let area = config.area.as_deref();
    let headhunter = HeadHunter::connect(client.clone(), &config.headhunter, area)?;
    let superjob = SuperJob::new(client, &config.superjob, area);

    let sources: Vec<&dyn VacancySource> = vec![&headhunter, &superjob];
    let driver = Driver {
        sources,
        period: config.period,
        page_pause: config.page_pause,
        language_pause: config.language_pause,
    };

    for provider_report in driver.run(&config.languages) {
        let title = report::table_title(
            &provider_report.provider,
            provider_report.location.as_deref(),
        );
        report::print_table(&title, &provider_report.rows);
    }

    info!("Done");
    Ok(())
}

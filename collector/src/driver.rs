//! Runs every language against every provider, in order.

use std::thread;
use std::time::Duration;

use common::Summary;
use tracing::info;

use crate::aggregator::collect_summary;
use crate::providers::{SearchQuery, VacancySource};

/// Summaries of one provider, in language order.
#[derive(Debug)]
pub struct ProviderReport {
    pub provider: String,
    /// Location this provider filtered by, for the table title.
    pub location: Option<String>,
    pub rows: Vec<(String, Summary)>,
}

pub struct Driver<'a> {
    pub sources: Vec<&'a dyn VacancySource>,
    pub period: Option<u32>,
    pub page_pause: Duration,
    pub language_pause: Duration,
}

impl Driver<'_> {
    /// Queries each source for each language; one report per source.
    pub fn run(&self, languages: &[String]) -> Vec<ProviderReport> {
        let mut reports: Vec<ProviderReport> = self
            .sources
            .iter()
            .map(|source| ProviderReport {
                provider: source.name().to_string(),
                location: source.location().map(str::to_string),
                rows: Vec::with_capacity(languages.len()),
            })
            .collect();

        for (index, language) in languages.iter().enumerate() {
            info!("Collecting {} ({}/{})", language, index + 1, languages.len());
            let query = SearchQuery {
                keyword: language.clone(),
                period: self.period,
            };

            for (source, report) in self.sources.iter().zip(reports.iter_mut()) {
                let summary = collect_summary(*source, &query, self.page_pause);
                info!(
                    provider = source.name(),
                    found = summary.vacancies_found,
                    processed = summary.vacancies_processed,
                    average = summary.average_salary,
                    "{language} done"
                );
                report.rows.push((language.clone(), summary));
            }

            let is_last = index + 1 == languages.len();
            if !is_last && !self.language_pause.is_zero() {
                thread::sleep(self.language_pause);
            }
        }

        reports
    }
}

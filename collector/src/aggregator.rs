//! Walks every result page of one provider for one language and folds the
//! listings into a [`Summary`].

use std::thread;
use std::time::Duration;

use common::Summary;
use tracing::{debug, warn};

use crate::providers::{SearchQuery, VacancySource};

/// Collects salary estimates across all pages of `query`.
///
/// A failed page is logged and skipped; the page count learned from earlier
/// responses still drives the loop. An empty page ends the walk early.
pub fn collect_summary<S: VacancySource + ?Sized>(
    source: &S,
    query: &SearchQuery,
    page_pause: Duration,
) -> Summary {
    let currency = source.target_currency();
    let mut estimates: Vec<f64> = Vec::new();
    let mut found = 0;
    let mut page = 0;
    let mut pages_needed = 1;

    while page < pages_needed {
        match source.fetch_page(query, page) {
            Ok(response) => {
                found = response.found;
                pages_needed = response.pages;

                if response.listings.is_empty() {
                    debug!(provider = source.name(), keyword = %query.keyword, page, "Empty page, stopping");
                    break;
                }

                estimates.extend(
                    response
                        .listings
                        .iter()
                        .filter_map(|listing| listing.estimate_in(currency)),
                );
            }
            Err(err) => {
                warn!(
                    provider = source.name(),
                    keyword = %query.keyword,
                    page,
                    pages = pages_needed,
                    "Failed to fetch page: {err}"
                );
            }
        }

        page += 1;
        if page < pages_needed && !page_pause.is_zero() {
            thread::sleep(page_pause);
        }
    }

    Summary::from_estimates(found, &estimates)
}

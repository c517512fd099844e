//! Job-search providers behind one paging contract.

pub mod headhunter;
pub mod superjob;

use common::Listing;

use crate::error::FetchError;

pub use headhunter::HeadHunter;
pub use superjob::SuperJob;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub keyword: String,
    /// Lookback period in days.
    pub period: Option<u32>,
}

/// One page of results, already mapped onto the shared model.
#[derive(Debug, Clone)]
pub struct Page {
    pub listings: Vec<Listing>,
    /// Total matching vacancies as reported by the provider.
    pub found: u64,
    /// Number of pages needed to see every result.
    pub pages: u32,
}

pub trait VacancySource {
    /// Display name, also used as the table title.
    fn name(&self) -> &str;

    /// Currency code the provider uses for rubles.
    fn target_currency(&self) -> &str;

    /// Location the search is actually filtered by, if any.
    fn location(&self) -> Option<&str>;

    /// Fetches the zero-based `page` of results for `query`.
    fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<Page, FetchError>;
}

/// Pages needed for `total` results at `per_page` per page.
pub(crate) fn page_count(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(u64::from(per_page))).unwrap_or(u32::MAX)
}

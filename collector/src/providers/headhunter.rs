//! HeadHunter (api.hh.ru) client.
//!
//! The API needs no key but rejects requests without a User-Agent, which
//! the shared client sets. Locations are searched by area id, so a city
//! name is resolved once against the `/areas` tree before any search.

use anyhow::{bail, Context};
use common::Listing;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::{Page, SearchQuery, VacancySource};
use crate::config::{is_place_name, HeadHunterSettings};
use crate::error::FetchError;
use crate::http::get_json;

pub const BASE_URL: &str = "https://api.hh.ru";
pub const NAME: &str = "HeadHunter";

const CURRENCY: &str = "RUR";
const PER_PAGE: u32 = 100;

#[derive(Debug, Deserialize)]
struct VacanciesResponse {
    #[serde(default)]
    found: u64,
    #[serde(default)]
    pages: u32,
    #[serde(default)]
    items: Vec<Vacancy>,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
struct Salary {
    from: Option<f64>,
    to: Option<f64>,
    currency: Option<String>,
}

impl From<Vacancy> for Listing {
    fn from(vacancy: Vacancy) -> Self {
        match vacancy.salary {
            Some(salary) => Listing {
                currency: salary.currency,
                salary_from: salary.from,
                salary_to: salary.to,
                negotiable: false,
            },
            None => Listing::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Area {
    id: String,
    name: String,
    #[serde(default)]
    areas: Vec<Area>,
}

pub struct HeadHunter {
    client: Client,
    base_url: String,
    area_ids: Vec<String>,
    /// Location the area ids were resolved from; `None` when unfiltered.
    location: Option<String>,
    only_with_salary: bool,
}

impl HeadHunter {
    /// Builds the client, resolving `area` to HeadHunter area ids first.
    ///
    /// Failing to load the area directory is fatal: without ids there is
    /// nothing meaningful to filter by.
    pub fn connect(
        client: Client,
        settings: &HeadHunterSettings,
        area: Option<&str>,
    ) -> anyhow::Result<Self> {
        let base_url = settings.base_url.trim_end_matches('/').to_string();

        let area_ids = match area {
            Some(area) => {
                let ids = resolve_area_ids(&client, &base_url, area)
                    .with_context(|| format!("failed to resolve HeadHunter area '{area}'"))?;
                if ids.is_empty() {
                    if settings.strict_area {
                        bail!("no HeadHunter area matches '{area}'");
                    }
                    warn!(area, "No HeadHunter area matches, searching without a location filter");
                } else {
                    info!(area, ids = ?ids, "Resolved HeadHunter areas");
                }
                ids
            }
            None => Vec::new(),
        };
        let location = area.filter(|_| !area_ids.is_empty()).map(str::to_string);

        Ok(Self {
            client,
            base_url,
            area_ids,
            location,
            only_with_salary: settings.only_with_salary,
        })
    }
}

impl VacancySource for HeadHunter {
    fn name(&self) -> &str {
        NAME
    }

    fn target_currency(&self) -> &str {
        CURRENCY
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<Page, FetchError> {
        let mut params: Vec<(&str, String)> = vec![
            ("text", query.keyword.clone()),
            ("page", page.to_string()),
            ("per_page", PER_PAGE.to_string()),
            ("currency", CURRENCY.to_string()),
        ];
        params.extend(self.area_ids.iter().map(|id| ("area", id.clone())));
        if let Some(period) = query.period {
            params.push(("period", period.to_string()));
        }
        if self.only_with_salary {
            params.push(("only_with_salary", "true".to_string()));
        }

        let url = format!("{}/vacancies", self.base_url);
        let response: VacanciesResponse = get_json(self.client.get(&url).query(&params))?;
        debug!(
            keyword = %query.keyword,
            page,
            items = response.items.len(),
            "HeadHunter page fetched"
        );

        Ok(Page {
            found: response.found,
            pages: response.pages,
            listings: response.items.into_iter().map(Listing::from).collect(),
        })
    }
}

/// Maps a location onto HeadHunter area ids.
///
/// Numeric input is taken as an id. Names are matched case-insensitively as
/// substrings against every area nested under the first country in the
/// directory. Anything else is ignored.
pub fn resolve_area_ids(
    client: &Client,
    base_url: &str,
    area: &str,
) -> Result<Vec<String>, FetchError> {
    let area = area.trim();
    if !area.is_empty() && area.chars().all(|c| c.is_ascii_digit()) {
        return Ok(vec![area.to_string()]);
    }
    if !is_place_name(area) {
        warn!(area, "Location is not a place name, ignoring it for HeadHunter");
        return Ok(Vec::new());
    }

    let url = format!("{}/areas", base_url.trim_end_matches('/'));
    let roots: Vec<Area> = get_json(client.get(&url))?;

    let needle = area.to_lowercase();
    let mut ids = Vec::new();
    if let Some(country) = roots.first() {
        collect_matching(&country.areas, &needle, &mut ids);
    }
    Ok(ids)
}

fn collect_matching(areas: &[Area], needle: &str, ids: &mut Vec<String>) {
    for area in areas {
        if area.name.to_lowercase().contains(needle) {
            ids.push(area.id.clone());
        }
        collect_matching(&area.areas, needle, ids);
    }
}

//! SuperJob (api.superjob.ru) client.

use common::Listing;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{page_count, Page, SearchQuery, VacancySource};
use crate::config::{is_place_name, SuperJobSettings};
use crate::error::FetchError;
use crate::http::get_json;

pub const BASE_URL: &str = "https://api.superjob.ru/2.0";
pub const NAME: &str = "SuperJob";

const CURRENCY: &str = "rub";
const PER_PAGE: u32 = 20;
const API_KEY_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Deserialize)]
struct VacanciesResponse {
    #[serde(default)]
    total: u64,
    #[serde(default)]
    objects: Vec<Vacancy>,
}

#[derive(Debug, Deserialize)]
struct Vacancy {
    payment_from: Option<f64>,
    payment_to: Option<f64>,
    currency: Option<String>,
    #[serde(default)]
    agreement: bool,
}

impl From<Vacancy> for Listing {
    fn from(vacancy: Vacancy) -> Self {
        Listing {
            currency: vacancy.currency,
            salary_from: vacancy.payment_from,
            salary_to: vacancy.payment_to,
            negotiable: vacancy.agreement,
        }
    }
}

pub struct SuperJob {
    client: Client,
    base_url: String,
    api_key: String,
    town: Option<String>,
    no_agreement: bool,
}

impl SuperJob {
    /// SuperJob filters by town name directly, no lookup needed. Anything
    /// that is not a place name (a HeadHunter area id, say) is not sent.
    pub fn new(client: Client, settings: &SuperJobSettings, town: Option<&str>) -> Self {
        let town = town.filter(|town| {
            let keep = is_place_name(town);
            if !keep {
                warn!(town, "Location is not a town name, ignoring it for SuperJob");
            }
            keep
        });

        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            town: town.map(str::to_string),
            no_agreement: settings.no_agreement,
        }
    }
}

impl VacancySource for SuperJob {
    fn name(&self) -> &str {
        NAME
    }

    fn target_currency(&self) -> &str {
        CURRENCY
    }

    fn location(&self) -> Option<&str> {
        self.town.as_deref()
    }

    fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<Page, FetchError> {
        let mut params: Vec<(&str, String)> = vec![
            ("keyword", query.keyword.clone()),
            // 0 means "all time"
            ("period", query.period.unwrap_or(0).to_string()),
            ("page", page.to_string()),
            ("count", PER_PAGE.to_string()),
        ];
        if let Some(town) = &self.town {
            params.push(("town", town.clone()));
        }
        if self.no_agreement {
            params.push(("no_agreement", "1".to_string()));
        }

        let url = format!("{}/vacancies/", self.base_url);
        let request = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&params);
        let response: VacanciesResponse = get_json(request)?;
        debug!(
            keyword = %query.keyword,
            page,
            items = response.objects.len(),
            "SuperJob page fetched"
        );

        Ok(Page {
            found: response.total,
            pages: page_count(response.total, PER_PAGE),
            listings: response.objects.into_iter().map(Listing::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use crate::http::build_client;
    use mockito::Matcher;

    fn superjob(base_url: String, town: Option<&str>) -> SuperJob {
        let config = test_config();
        let settings = SuperJobSettings {
            base_url,
            ..config.superjob.clone()
        };
        SuperJob::new(build_client(&config).unwrap(), &settings, town)
    }

    fn query() -> SearchQuery {
        SearchQuery {
            keyword: "Python".to_string(),
            period: None,
        }
    }

    #[test]
    fn test_fetch_page_sends_key_and_filters() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/vacancies/")
            .match_header("x-api-app-id", "test-key")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("keyword".into(), "Python".into()),
                Matcher::UrlEncoded("town".into(), "Moscow".into()),
                Matcher::UrlEncoded("period".into(), "0".into()),
                Matcher::UrlEncoded("page".into(), "1".into()),
                Matcher::UrlEncoded("no_agreement".into(), "1".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{
                    "total": 41,
                    "more": true,
                    "objects": [
                        {"payment_from": 100000, "payment_to": 0, "currency": "rub", "agreement": false},
                        {"payment_from": 0, "payment_to": 0, "currency": "rub", "agreement": true},
                        {"payment_from": 2000, "payment_to": 3000, "currency": "usd", "agreement": false}
                    ]
                }"#,
            )
            .create();

        let sj = superjob(server.url(), Some("Moscow"));
        let page = sj.fetch_page(&query(), 1).unwrap();
        mock.assert();

        assert_eq!(page.found, 41);
        assert_eq!(page.pages, 3);
        let estimates: Vec<_> = page
            .listings
            .iter()
            .map(|listing| listing.estimate_in(sj.target_currency()))
            .collect();
        assert_eq!(estimates, vec![Some(120_000.0), None, None]);
    }

    #[test]
    fn test_agreement_listing_is_negotiable() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/vacancies/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{"total": 1, "objects": [
                    {"payment_from": 90000, "payment_to": 110000, "currency": "rub", "agreement": true}
                ]}"#,
            )
            .create();

        let page = superjob(server.url(), None).fetch_page(&query(), 0).unwrap();
        assert!(page.listings[0].negotiable);
        assert_eq!(page.listings[0].estimate_in(CURRENCY), None);
    }

    #[test]
    fn test_fetch_page_surfaces_http_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/vacancies/")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body(r#"{"error": {"code": 403, "message": "Invalid app_key"}}"#)
            .create();

        let err = superjob(server.url(), None).fetch_page(&query(), 0).unwrap_err();
        assert!(matches!(err, FetchError::Status { status, .. } if status.as_u16() == 403));
    }

    #[test]
    fn test_empty_result_needs_no_pages() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/vacancies/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"total": 0, "objects": []}"#)
            .create();

        let page = superjob(server.url(), None).fetch_page(&query(), 0).unwrap();
        assert_eq!(page.found, 0);
        assert_eq!(page.pages, 0);
        assert!(page.listings.is_empty());
    }

    #[test]
    fn test_numeric_area_is_not_sent_as_town() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/vacancies/")
            .match_query(Matcher::Regex(
                "^keyword=Python&period=0&page=0&count=20&no_agreement=1$".to_string(),
            ))
            .with_status(200)
            .with_body(r#"{"total": 0, "objects": []}"#)
            .create();

        let sj = superjob(server.url(), Some("1"));
        assert_eq!(sj.location(), None);
        sj.fetch_page(&query(), 0).unwrap();
        mock.assert();

        assert_eq!(superjob(server.url(), Some("Kazan")).location(), Some("Kazan"));
    }

    #[test]
    fn test_agreement_filter_left_out_when_disabled() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/vacancies/")
            .match_query(Matcher::Regex(
                "^keyword=Python&period=0&page=0&count=20$".to_string(),
            ))
            .with_status(200)
            .with_body(r#"{"total": 0, "objects": []}"#)
            .create();

        let config = test_config();
        let settings = SuperJobSettings {
            base_url: server.url(),
            no_agreement: false,
            ..config.superjob.clone()
        };
        let sj = SuperJob::new(build_client(&config).unwrap(), &settings, None);
        sj.fetch_page(&query(), 0).unwrap();
        mock.assert();
    }
}

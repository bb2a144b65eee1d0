//! HeadHunter (`api.hh.ru`) vacancy search.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::{self, SearchConfig};
use crate::error::Result;
use crate::models::{HhPage, HhVacancy};
use crate::source::{Page, VacancySource};

/// Searches Moscow vacancies on HeadHunter.
pub struct HeadHunterClient {
    client: Client,
    base_url: String,
    area: u32,
    search: SearchConfig,
}

impl HeadHunterClient {
    pub fn new(search: SearchConfig, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: super::build_http_client(timeout)?,
            base_url: config::HH_API_URL.to_string(),
            area: config::HH_MOSCOW_AREA,
            search,
        })
    }

    /// Point the client at another endpoint (e.g. a local mirror).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Replace the HTTP client, e.g. to change proxy or TLS settings.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Query-string parameters for one page of results.
    pub fn query(&self, keyword: &str, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("text", format!("программист {}", keyword)),
            ("area", self.area.to_string()),
            ("period", self.search.period_days.to_string()),
            ("per_page", self.search.per_page.to_string()),
            ("page", page.to_string()),
        ]
    }
}

impl VacancySource for HeadHunterClient {
    type Vacancy = HhVacancy;

    fn name(&self) -> &str {
        config::HH_SITE_NAME
    }

    fn fetch_page(&self, keyword: &str, page: u32) -> Result<Page<HhVacancy>> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&self.query(keyword, page))
            .send()?
            .error_for_status()?;
        let body: HhPage = serde_json::from_str(&resp.text()?)?;
        let has_more = body.has_more_after(page);
        Ok(Page {
            vacancies: body.items,
            found: body.found,
            has_more,
        })
    }
}

//! SuperJob (`api.superjob.ru`) vacancy search.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::{self, SearchConfig};
use crate::error::{Result, SalaryError};
use crate::models::{SjPage, SjVacancy};
use crate::source::{Page, VacancySource};

/// Searches Moscow IT vacancies on SuperJob.
///
/// Every request carries the application secret in the `X-Api-App-Id` header.
pub struct SuperJobClient {
    client: Client,
    base_url: String,
    token: String,
    town: u32,
    catalogue: u32,
    search: SearchConfig,
}

impl SuperJobClient {
    /// Create a client. Fails with [`SalaryError::MissingCredential`] for a
    /// blank token.
    pub fn new(token: impl Into<String>, search: SearchConfig, timeout: Duration) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SalaryError::MissingCredential(format!(
                "SuperJob secret key is empty (set {})",
                config::SJ_TOKEN_ENV
            )));
        }
        Ok(Self {
            client: super::build_http_client(timeout)?,
            base_url: config::SJ_API_URL.to_string(),
            token,
            town: config::SJ_MOSCOW_TOWN,
            catalogue: config::SJ_IT_CATALOGUE,
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
    ///
    /// The keyword is matched against the position title only.
    pub fn query(&self, keyword: &str, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("period", self.search.period_days.to_string()),
            ("catalogues", self.catalogue.to_string()),
            ("town", self.town.to_string()),
            ("count", self.search.per_page.to_string()),
            ("keywords[0][keys]", keyword.to_string()),
            ("keywords[0][skwc]", "particular".to_string()),
            ("keywords[0][srws]", config::SJ_SEARCH_IN_TITLE.to_string()),
            ("page", page.to_string()),
        ]
    }
}

impl VacancySource for SuperJobClient {
    type Vacancy = SjVacancy;

    fn name(&self) -> &str {
        config::SJ_SITE_NAME
    }

    fn fetch_page(&self, keyword: &str, page: u32) -> Result<Page<SjVacancy>> {
        let resp = self
            .client
            .get(&self.base_url)
            .header(config::SJ_TOKEN_HEADER, &self.token)
            .query(&self.query(keyword, page))
            .send()?
            .error_for_status()?;
        let body: SjPage = serde_json::from_str(&resp.text()?)?;
        Ok(Page {
            vacancies: body.objects,
            found: body.total,
            has_more: body.more,
        })
    }
}

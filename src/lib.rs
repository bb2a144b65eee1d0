//! Average programming salaries from Russian job-search APIs.
//!
//! Queries HeadHunter and SuperJob for Moscow vacancies per programming
//! language, estimates a rouble salary for every vacancy that states one, and
//! renders the averages as ASCII tables.
//!
//! # Quick start
//!
//! ```no_run
//! use job_salaries::{Site, SalaryStats};
//!
//! let stats = SalaryStats::builder()
//!     .languages(["Python", "Rust"])
//!     .superjob_token("v3.r.secret")
//!     .build()
//!     .unwrap();
//!
//! let sites = stats.collect_sites(&[Site::HeadHunter, Site::SuperJob]).unwrap();
//! println!("{}", job_salaries::report::render_report(&sites, "Moscow"));
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod salary;
pub mod source;
pub mod sources;
pub mod stats;

pub use config::SearchConfig;
pub use error::{Result, SalaryError};
pub use models::{LanguageStats, SiteStats};
pub use salary::{predict_salary, SalaryListing};
pub use source::{fetch_all, Fetched, Page, VacancySource};
pub use sources::{HeadHunterClient, SuperJobClient};
pub use stats::{aggregate, collect_site_stats};

use std::fmt;
use std::time::Duration;

/// A supported job-search API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    HeadHunter,
    SuperJob,
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Site::HeadHunter => f.write_str(config::HH_SITE_NAME),
            Site::SuperJob => f.write_str(config::SJ_SITE_NAME),
        }
    }
}

// ---------------------------------------------------------------------------
// SalaryStatsBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SalaryStats`] instance.
///
/// Use [`SalaryStats::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SalaryStatsBuilder::build).
pub struct SalaryStatsBuilder {
    languages: Vec<String>,
    search: SearchConfig,
    timeout: Duration,
    superjob_token: Option<String>,
}

impl Default for SalaryStatsBuilder {
    fn default() -> Self {
        Self {
            languages: config::default_languages(),
            search: SearchConfig::default(),
            timeout: config::DEFAULT_TIMEOUT,
            superjob_token: None,
        }
    }
}

impl SalaryStatsBuilder {
    /// Replace the list of languages to search for. Order is kept in the report.
    pub fn languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Only count vacancies published in the last `days` days. Defaults to 30.
    pub fn period_days(mut self, days: u32) -> Self {
        self.search.period_days = days;
        self
    }

    /// Page size requested from the APIs. Defaults to 100.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.search.per_page = per_page;
        self
    }

    /// Cap the number of pages fetched per language. Unlimited by default.
    pub fn max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.search.max_pages = max_pages;
        self
    }

    /// HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// SuperJob application secret, required for [`Site::SuperJob`].
    pub fn superjob_token(mut self, token: impl Into<String>) -> Self {
        self.superjob_token = Some(token.into());
        self
    }

    /// Validate the configuration. No request is made here.
    pub fn build(self) -> Result<SalaryStats> {
        if self.languages.is_empty() {
            return Err(SalaryError::InvalidArgument(
                "at least one language is required".to_string(),
            ));
        }
        if let Some(blank) = self.languages.iter().find(|l| l.trim().is_empty()) {
            return Err(SalaryError::InvalidArgument(format!(
                "blank language name: {:?}",
                blank
            )));
        }
        if self.search.per_page == 0 {
            return Err(SalaryError::InvalidArgument(
                "per_page must be positive".to_string(),
            ));
        }
        if self.search.max_pages == Some(0) {
            return Err(SalaryError::InvalidArgument(
                "max_pages must be positive".to_string(),
            ));
        }
        Ok(SalaryStats {
            languages: self.languages,
            search: self.search,
            timeout: self.timeout,
            superjob_token: self.superjob_token,
        })
    }
}

// ---------------------------------------------------------------------------
// SalaryStats
// ---------------------------------------------------------------------------

/// Entry point: builds source clients and collects per-language statistics.
#[derive(Clone)]
pub struct SalaryStats {
    languages: Vec<String>,
    search: SearchConfig,
    timeout: Duration,
    superjob_token: Option<String>,
}

impl SalaryStats {
    /// Create a new builder with the default languages and query settings.
    pub fn builder() -> SalaryStatsBuilder {
        SalaryStatsBuilder::default()
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// HeadHunter client using this configuration.
    pub fn headhunter(&self) -> Result<HeadHunterClient> {
        HeadHunterClient::new(self.search.clone(), self.timeout)
    }

    /// SuperJob client using this configuration.
    ///
    /// Fails with [`SalaryError::MissingCredential`] if no token was set.
    pub fn superjob(&self) -> Result<SuperJobClient> {
        SuperJobClient::new(self.superjob_token()?, self.search.clone(), self.timeout)
    }

    fn superjob_token(&self) -> Result<&str> {
        self.superjob_token.as_deref().ok_or_else(|| {
            SalaryError::MissingCredential(format!(
                "SuperJob secret key not set (use {})",
                config::SJ_TOKEN_ENV
            ))
        })
    }

    /// Collect every configured language from `source`.
    pub fn collect<S: VacancySource + ?Sized>(&self, source: &S) -> Result<SiteStats> {
        collect_site_stats(source, &self.languages, self.search.max_pages)
    }

    /// Collect each site in turn. Nothing is returned unless all succeed.
    ///
    /// A missing SuperJob token is reported before any request is made.
    pub fn collect_sites(&self, sites: &[Site]) -> Result<Vec<SiteStats>> {
        if sites.contains(&Site::SuperJob) {
            self.superjob_token()?;
        }
        let mut collected = Vec::with_capacity(sites.len());
        for site in sites {
            let stats = match site {
                Site::HeadHunter => self.collect(&self.headhunter()?)?,
                Site::SuperJob => self.collect(&self.superjob()?)?,
            };
            collected.push(stats);
        }
        Ok(collected)
    }
}

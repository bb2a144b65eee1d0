//! Paginated vacancy sources and the page-walking fetch loop.

use tracing::{debug, warn};

use crate::error::Result;
use crate::salary::SalaryListing;

// ---------------------------------------------------------------------------
// Page / Fetched
// ---------------------------------------------------------------------------

/// One decoded page of search results.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<V> {
    pub vacancies: Vec<V>,
    /// Total number of matches the API reports for the query.
    pub found: u64,
    /// Whether the API has pages after this one.
    pub has_more: bool,
}

/// Every vacancy fetched for a keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<V> {
    pub vacancies: Vec<V>,
    /// Total reported by the last page fetched.
    pub found: u64,
    pub pages_fetched: u32,
}

// ---------------------------------------------------------------------------
// VacancySource
// ---------------------------------------------------------------------------

/// A job-search API that can be queried one page at a time.
pub trait VacancySource {
    type Vacancy: SalaryListing;

    /// Display name used as the report title.
    fn name(&self) -> &str;

    /// Fetch page `page` (zero-based) of results for `keyword`.
    ///
    /// Any non-success response is returned as an error.
    fn fetch_page(&self, keyword: &str, page: u32) -> Result<Page<Self::Vacancy>>;
}

/// Walk pages from 0 until the source reports no more, or `max_pages` is hit.
///
/// The first failing page aborts the whole fetch.
pub fn fetch_all<S: VacancySource + ?Sized>(
    source: &S,
    keyword: &str,
    max_pages: Option<u32>,
) -> Result<Fetched<S::Vacancy>> {
    let mut vacancies = Vec::new();
    let mut found = 0;
    let mut page = 0;

    loop {
        if max_pages.is_some_and(|cap| page >= cap) {
            warn!(
                source = source.name(),
                keyword,
                pages = page,
                "page cap reached, remaining pages skipped"
            );
            break;
        }

        let result = source.fetch_page(keyword, page)?;
        debug!(
            source = source.name(),
            keyword,
            page,
            items = result.vacancies.len(),
            found = result.found,
            "fetched page"
        );
        vacancies.extend(result.vacancies);
        found = result.found;
        page += 1;

        if !result.has_more {
            break;
        }
    }

    Ok(Fetched {
        vacancies,
        found,
        pages_fetched: page,
    })
}

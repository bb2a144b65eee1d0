//! Per-language aggregation of salary estimates.

use tracing::info;

use crate::error::Result;
use crate::models::{LanguageStats, SiteStats};
use crate::salary::SalaryListing;
use crate::source::{fetch_all, VacancySource};

/// Aggregate estimates over a set of vacancies.
///
/// `vacancies_found` is the number of vacancies passed in; the average is the
/// mean of usable estimates truncated to an integer, or 0 if none are usable.
/// A zero estimate counts as unusable.
pub fn aggregate<V: SalaryListing>(vacancies: &[V]) -> LanguageStats {
    let salaries: Vec<f64> = vacancies
        .iter()
        .filter_map(|v| v.predict_rub_salary())
        .filter(|s| *s != 0.0)
        .collect();

    let average_salary = if salaries.is_empty() {
        0
    } else {
        (salaries.iter().sum::<f64>() / salaries.len() as f64) as u64
    };

    LanguageStats {
        vacancies_found: vacancies.len() as u64,
        vacancies_processed: salaries.len() as u64,
        average_salary,
    }
}

/// Fetch and aggregate every language from one source, in order.
///
/// The found count of each row is the total reported by the API. Any fetch
/// error aborts the whole collection.
pub fn collect_site_stats<S: VacancySource + ?Sized>(
    source: &S,
    languages: &[String],
    max_pages: Option<u32>,
) -> Result<SiteStats> {
    let mut site = SiteStats::new(source.name());

    for language in languages {
        let fetched = fetch_all(source, language, max_pages)?;
        let stats = aggregate(&fetched.vacancies).with_found(fetched.found);
        info!(
            source = source.name(),
            language = language.as_str(),
            pages = fetched.pages_fetched,
            found = stats.vacancies_found,
            processed = stats.vacancies_processed,
            average = stats.average_salary,
            "language collected"
        );
        site.push(language.as_str(), stats);
    }

    Ok(site)
}

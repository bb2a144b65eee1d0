use serde::{Deserialize, Serialize};

/// Aggregated salary figures for one search keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStats {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

impl LanguageStats {
    /// Replace the found count, e.g. with the total the API reported.
    pub fn with_found(mut self, found: u64) -> Self {
        self.vacancies_found = found;
        self
    }
}

/// Per-language rows collected from one source, in request order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteStats {
    pub site: String,
    pub languages: Vec<(String, LanguageStats)>,
}

impl SiteStats {
    pub fn new(site: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            languages: Vec::new(),
        }
    }

    pub fn push(&mut self, language: impl Into<String>, stats: LanguageStats) {
        self.languages.push((language.into(), stats));
    }

    /// Look up the row for a language.
    pub fn get(&self, language: &str) -> Option<&LanguageStats> {
        self.languages
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, stats)| stats)
    }
}

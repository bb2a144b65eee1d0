use std::time::Duration;

pub const HH_API_URL: &str = "https://api.hh.ru/vacancies";
pub const SJ_API_URL: &str = "https://api.superjob.ru/2.0/vacancies/";

/// Environment variable holding the SuperJob application secret.
pub const SJ_TOKEN_ENV: &str = "SJ_SECRET_KEY";
pub const SJ_TOKEN_HEADER: &str = "X-Api-App-Id";

pub const HH_SITE_NAME: &str = "HeadHunter";
pub const SJ_SITE_NAME: &str = "SuperJob";

// Region and catalogue ids are per-API: Moscow is 1 on HeadHunter, 4 on SuperJob.
pub const HH_MOSCOW_AREA: u32 = 1;
pub const SJ_MOSCOW_TOWN: u32 = 4;
pub const SJ_IT_CATALOGUE: u32 = 48;
pub const SJ_SEARCH_IN_TITLE: u32 = 1;

pub const HH_RUB_CURRENCY: &str = "RUR";
pub const SJ_RUB_CURRENCY: &str = "rub";

pub const REPORT_REGION: &str = "Moscow";

pub const TABLE_HEADERS: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

pub const DEFAULT_PERIOD_DAYS: u32 = 30;
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub fn default_languages() -> Vec<String> {
    [
        "Ruby",
        "Swift",
        "C",
        "C#",
        "Java",
        "JavaScript",
        "PHP",
        "R",
        "Python",
        "C++",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Query parameters shared by every source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Only vacancies published within this many days.
    pub period_days: u32,
    /// Page size requested from the API.
    pub per_page: u32,
    /// Stop after this many pages even if the API reports more.
    pub max_pages: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            period_days: DEFAULT_PERIOD_DAYS,
            per_page: DEFAULT_PER_PAGE,
            max_pages: None,
        }
    }
}

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// HhSalary — nested salary range of a HeadHunter vacancy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HhSalary {
    #[serde(default, deserialize_with = "super::salary_bound")]
    pub from: Option<f64>,
    #[serde(default, deserialize_with = "super::salary_bound")]
    pub to: Option<f64>,
    #[serde(default, deserialize_with = "super::nullable_string")]
    pub currency: String,
    pub gross: Option<bool>,
}

// ---------------------------------------------------------------------------
// HhVacancy — one item of a HeadHunter search page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HhVacancy {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub salary: Option<HhSalary>,
    pub alternate_url: Option<String>,
}

// ---------------------------------------------------------------------------
// HhPage — response body of `GET /vacancies`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HhPage {
    #[serde(default)]
    pub items: Vec<HhVacancy>,
    #[serde(default)]
    pub found: u64,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub page: u32,
    pub per_page: Option<u32>,
}

impl HhPage {
    /// Whether pages follow the zero-based page `requested`.
    ///
    /// Judged from the index that was asked for, not the echoed `page` field.
    pub fn has_more_after(&self, requested: u32) -> bool {
        requested.saturating_add(1) < self.pages
    }
}

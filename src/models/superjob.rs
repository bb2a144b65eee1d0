use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SjVacancy — one object of a SuperJob search page
// ---------------------------------------------------------------------------

/// SuperJob reports salary as flat fields where `0` means "not specified".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SjVacancy {
    pub id: Option<u64>,
    pub profession: Option<String>,
    #[serde(default, deserialize_with = "super::salary_bound")]
    pub payment_from: Option<f64>,
    #[serde(default, deserialize_with = "super::salary_bound")]
    pub payment_to: Option<f64>,
    #[serde(default, deserialize_with = "super::nullable_string")]
    pub currency: String,
    pub link: Option<String>,
}

// ---------------------------------------------------------------------------
// SjPage — response body of `GET /2.0/vacancies/`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SjPage {
    #[serde(default)]
    pub objects: Vec<SjVacancy>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub more: bool,
}

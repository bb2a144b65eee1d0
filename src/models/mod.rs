pub mod headhunter;
pub mod stats;
pub mod superjob;

pub use headhunter::*;
pub use stats::*;
pub use superjob::*;

use serde::{Deserialize, Deserializer};

/// Deserialize a salary bound, treating `null`, a missing field and `0` alike
/// as "not given".
pub(crate) fn salary_bound<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = Option::<f64>::deserialize(deserializer)?;
    Ok(amount.filter(|v| *v != 0.0))
}

/// Deserialize a string field, reading `null` as empty.
pub(crate) fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

//! Salary estimation for a single vacancy.
//!
//! A vacancy with both bounds is valued at the midpoint. One-sided ranges are
//! adjusted: a lone lower bound is scaled up by 1.2, a lone upper bound down
//! by 0.8. Vacancies outside roubles never yield an estimate.

use crate::config;
use crate::models::{HhVacancy, SjVacancy};

const LOWER_ONLY_COEF: f64 = 1.2;
const UPPER_ONLY_COEF: f64 = 0.8;

/// Estimate a salary from an optional range.
///
/// Returns `None` when neither bound is given.
pub fn predict_salary(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (Some(from), None) => Some(from * LOWER_ONLY_COEF),
        (None, Some(to)) => Some(to * UPPER_ONLY_COEF),
        (None, None) => None,
    }
}

/// A vacancy that can be valued in roubles.
pub trait SalaryListing {
    /// Estimated salary in roubles, or `None` if the vacancy is unusable.
    fn predict_rub_salary(&self) -> Option<f64>;
}

impl SalaryListing for HhVacancy {
    fn predict_rub_salary(&self) -> Option<f64> {
        let salary = self.salary.as_ref()?;
        if salary.currency != config::HH_RUB_CURRENCY {
            return None;
        }
        predict_salary(salary.from, salary.to)
    }
}

impl SalaryListing for SjVacancy {
    fn predict_rub_salary(&self) -> Option<f64> {
        if self.currency != config::SJ_RUB_CURRENCY {
            return None;
        }
        predict_salary(self.payment_from, self.payment_to)
    }
}

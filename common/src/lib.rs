//! Shared salary model for the vacancy collectors.
//!
//! Provider clients turn their own response shapes into [`Listing`]s; the
//! aggregation in the binary folds the per-listing estimates into a
//! [`Summary`] per programming language.

/// One vacancy as seen by the aggregation, independent of the provider.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Listing {
    pub currency: Option<String>,
    pub salary_from: Option<f64>,
    pub salary_to: Option<f64>,
    /// Salary is "by agreement", no numbers were published.
    pub negotiable: bool,
}

impl Listing {
    /// Point estimate of this listing's salary in `currency`.
    ///
    /// Returns `None` when the listing is in another currency, is negotiable,
    /// or carries no usable bounds. Estimates that round to zero are dropped
    /// so a processed listing never pulls the average down to 0.
    pub fn estimate_in(&self, currency: &str) -> Option<f64> {
        if self.negotiable || self.currency.as_deref() != Some(currency) {
            return None;
        }
        estimate_salary(self.salary_from, self.salary_to).filter(|estimate| estimate.round() > 0.0)
    }
}

/// Converts an open salary range into a single number.
///
/// Both bounds give the midpoint. A lone upper bound is discounted by 20%,
/// a lone lower bound is raised by 20%. Zero and negative bounds count as
/// missing.
pub fn estimate_salary(from: Option<f64>, to: Option<f64>) -> Option<f64> {
    let from = from.filter(|v| *v > 0.0);
    let to = to.filter(|v| *v > 0.0);

    match (from, to) {
        (Some(from), Some(to)) => Some((from + to) / 2.0),
        (None, Some(to)) => Some(to * 0.8),
        (Some(from), None) => Some(from * 1.2),
        (None, None) => None,
    }
}

/// Per-language result of one provider run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// Total reported by the provider, not the number of listings seen.
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: u64,
}

impl Summary {
    /// Builds a summary from the collected estimates; the average is the
    /// rounded mean, or 0 when nothing was collected.
    pub fn from_estimates(vacancies_found: u64, estimates: &[f64]) -> Self {
        let average_salary = if estimates.is_empty() {
            0
        } else {
            let mean = estimates.iter().sum::<f64>() / estimates.len() as f64;
            mean.round().max(0.0) as u64
        };

        Self {
            vacancies_found,
            vacancies_processed: estimates.len() as u64,
            average_salary,
        }
    }
}

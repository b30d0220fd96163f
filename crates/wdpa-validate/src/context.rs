//! Reference data and thresholds handed to every check.

use std::collections::HashSet;

use chrono::Datelike;
use wdpa_model::CountryCodes;

use crate::config::Thresholds;

/// Immutable inputs shared by all checks of a run.
#[derive(Debug, Clone)]
pub struct ValidationContext<'a> {
    country_codes: Option<&'a CountryCodes>,
    thresholds: Thresholds,
    status_years: HashSet<String>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(thresholds: Thresholds) -> Self {
        let current_year = chrono::Utc::now().year();
        Self {
            country_codes: None,
            status_years: status_years(thresholds.first_status_year, current_year),
            thresholds,
        }
    }

    #[must_use]
    pub fn with_country_codes(mut self, codes: &'a CountryCodes) -> Self {
        self.country_codes = Some(codes);
        self
    }

    /// Pin the last valid status year instead of using the clock.
    #[must_use]
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.status_years = status_years(self.thresholds.first_status_year, year);
        self
    }

    pub fn country_codes(&self) -> Option<&'a CountryCodes> {
        self.country_codes
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn status_years(&self) -> &HashSet<String> {
        &self.status_years
    }
}

impl Default for ValidationContext<'_> {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}

/// `"0"` (year unknown) plus every year from `first` through `last`.
pub fn status_years(first: i32, last: i32) -> HashSet<String> {
    std::iter::once("0".to_string())
        .chain((first..=last).map(|year| year.to_string()))
        .collect()
}

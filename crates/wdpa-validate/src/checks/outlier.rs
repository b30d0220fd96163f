//! Statistical mismatch between a reported and a computed area.
//!
//! For each record the statistic `(a + b) / b` is computed. Ratios outside
//! `(0, trim_max]` are discarded and the remainder gives a band of
//! `mean ± 2·sd`. A record is an outlier when its ratio leaves the band
//! and the areas also differ by more than an absolute floor, which keeps
//! tiny sites with large relative error out of the report.

use std::collections::BTreeSet;

use wdpa_model::{Field, RecordSet};

use super::CheckResult;
use crate::error::CheckError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierParams {
    /// Minimum `|a - b|` (km²) for a record to be flagged.
    pub abs_diff_threshold: f64,
    /// Largest ratio kept when deriving the band.
    pub trim_max: f64,
}

impl Default for OutlierParams {
    fn default() -> Self {
        Self {
            abs_diff_threshold: 50.0,
            trim_max: 100.0,
        }
    }
}

/// Acceptance band derived from the cleaned ratios.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioBand {
    pub mean: f64,
    pub std_dev: f64,
    pub lower: f64,
    pub upper: f64,
}

impl RatioBand {
    pub fn contains(&self, ratio: f64) -> bool {
        ratio >= self.lower && ratio <= self.upper
    }
}

/// Band over ratios in `(0, trim_max]`; `None` with fewer than two such ratios.
pub fn ratio_band(ratios: impl IntoIterator<Item = f64>, trim_max: f64) -> Option<RatioBand> {
    let cleaned: Vec<f64> = ratios
        .into_iter()
        .filter(|r| r.is_finite() && *r > 0.0 && *r <= trim_max)
        .collect();
    if cleaned.len() < 2 {
        return None;
    }
    let n = cleaned.len() as f64;
    let mean = cleaned.iter().sum::<f64>() / n;
    // Sample standard deviation.
    let variance = cleaned.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let std_dev = variance.sqrt();
    Some(RatioBand {
        mean,
        std_dev,
        lower: mean - 2.0 * std_dev,
        upper: mean + 2.0 * std_dev,
    })
}

/// Records whose `(a + b) / b` ratio is outside the band and whose
/// `|a - b|` exceeds the absolute threshold.
pub fn outlier_ratio_check(
    records: &RecordSet,
    field_a: Field,
    field_b: Field,
    params: OutlierParams,
) -> CheckResult {
    if field_a == field_b {
        return Err(CheckError::Configuration(format!(
            "outlier ratio compares {field_a} with itself"
        )));
    }
    if !(params.abs_diff_threshold.is_finite() && params.abs_diff_threshold >= 0.0) {
        return Err(CheckError::Configuration(format!(
            "absolute difference threshold must be non-negative, got {}",
            params.abs_diff_threshold
        )));
    }
    if !(params.trim_max.is_finite() && params.trim_max > 0.0) {
        return Err(CheckError::Configuration(format!(
            "ratio trim bound must be positive, got {}",
            params.trim_max
        )));
    }

    let ids = records.identifiers()?;
    let a = records.numeric(field_a)?;
    let b = records.numeric(field_b)?;

    let pairs: Vec<Option<(f64, f64)>> = a
        .iter()
        .zip(&b)
        .map(|(a, b)| a.zip(*b))
        .collect();
    let ratios: Vec<Option<f64>> = pairs
        .iter()
        .map(|pair| pair.map(|(a, b)| (a + b) / b))
        .collect();

    let Some(band) = ratio_band(ratios.iter().flatten().copied(), params.trim_max) else {
        return Ok(BTreeSet::new());
    };

    let mut violators = BTreeSet::new();
    for (idx, (pair, ratio)) in pairs.iter().zip(&ratios).enumerate() {
        let (Some((a, b)), Some(ratio)) = (pair, ratio) else {
            continue;
        };
        let outside = *ratio < band.lower || *ratio > band.upper;
        if outside && (a - b).abs() > params.abs_diff_threshold {
            violators.insert(ids[idx].clone());
        }
    }
    Ok(violators)
}

//! Threshold and runner configuration, loaded from TOML.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::runner::RunOptions;

/// Numeric constants used by the area and status rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    /// Multiplier absorbing rounding noise in size-order checks.
    pub size_tolerance: f64,
    /// Absolute difference (km²) an outlier ratio must also exceed.
    pub max_abs_diff_km2: f64,
    /// Ratios above this are left out of the outlier statistics.
    pub ratio_trim_max: f64,
    /// Marine proportion at or below which an area is terrestrial.
    pub coast_min: f64,
    /// Marine proportion at or above which an area is marine.
    pub coast_max: f64,
    /// GIS areas at or below this (km²) are flagged.
    pub min_gis_area_km2: f64,
    pub first_status_year: i32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            size_tolerance: 1.0001,
            max_abs_diff_km2: 50.0,
            ratio_trim_max: 100.0,
            coast_min: 0.1,
            coast_max: 0.9,
            min_gis_area_km2: 0.0001,
            first_status_year: 1819,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::InvalidThreshold {
                    name,
                    message: format!("must be a positive number, got {value}"),
                })
            }
        }

        positive("size_tolerance", self.size_tolerance)?;
        positive("ratio_trim_max", self.ratio_trim_max)?;
        if !(self.max_abs_diff_km2.is_finite() && self.max_abs_diff_km2 >= 0.0) {
            return Err(ConfigError::InvalidThreshold {
                name: "max_abs_diff_km2",
                message: format!("must be non-negative, got {}", self.max_abs_diff_km2),
            });
        }
        if !self.min_gis_area_km2.is_finite() {
            return Err(ConfigError::InvalidThreshold {
                name: "min_gis_area_km2",
                message: "must be finite".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.coast_min) || !(0.0..=1.0).contains(&self.coast_max) {
            return Err(ConfigError::InvalidThreshold {
                name: "coast_min",
                message: "coast breakpoints must lie within [0, 1]".to_string(),
            });
        }
        if self.coast_min >= self.coast_max {
            return Err(ConfigError::InvalidThreshold {
                name: "coast_min",
                message: format!(
                    "must be below coast_max ({} >= {})",
                    self.coast_min, self.coast_max
                ),
            });
        }
        Ok(())
    }
}

/// Parallelism and time budget for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Wall-clock budget in seconds; 0 means unbounded.
    pub time_budget_secs: u64,
    /// Worker threads; 0 uses the rayon default.
    pub threads: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QaConfig {
    pub thresholds: Thresholds,
    pub runner: RunnerConfig,
}

impl QaConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: QaConfig = toml::from_str(&contents).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.thresholds.validate()?;
        Ok(config)
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            time_budget: (self.runner.time_budget_secs > 0)
                .then(|| Duration::from_secs(self.runner.time_budget_secs)),
            threads: (self.runner.threads > 0).then_some(self.runner.threads),
        }
    }
}

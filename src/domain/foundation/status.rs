//! Status classifications for KPIs and categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Attainment ratio at or above which a figure counts as on target.
pub const ON_TARGET_RATIO: f64 = 1.0;

/// Attainment ratio at or above which a figure counts as a warning rather than a miss.
pub const WARNING_RATIO: f64 = 0.8;

/// Health of a KPI tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KpiStatus {
    #[default]
    Good,
    Warning,
    Danger,
}

impl KpiStatus {
    /// Classifies a `current / target` ratio.
    pub fn from_attainment(ratio: f64) -> Self {
        if ratio >= ON_TARGET_RATIO {
            KpiStatus::Good
        } else if ratio >= WARNING_RATIO {
            KpiStatus::Warning
        } else {
            KpiStatus::Danger
        }
    }

    /// Returns true if the KPI needs attention.
    pub fn needs_attention(&self) -> bool {
        !matches!(self, KpiStatus::Good)
    }
}

impl fmt::Display for KpiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            KpiStatus::Good => "good",
            KpiStatus::Warning => "warning",
            KpiStatus::Danger => "danger",
        };
        write!(f, "{}", s)
    }
}

/// Sales performance of a menu category against its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryStatus {
    #[default]
    Good,
    Warning,
    Poor,
}

impl CategoryStatus {
    /// Classifies a `sales / target` ratio: good ≥ 100%, warning 80–99%, poor < 80%.
    pub fn from_attainment(ratio: f64) -> Self {
        if ratio >= ON_TARGET_RATIO {
            CategoryStatus::Good
        } else if ratio >= WARNING_RATIO {
            CategoryStatus::Warning
        } else {
            CategoryStatus::Poor
        }
    }

    /// Returns true if the category needs attention.
    pub fn needs_attention(&self) -> bool {
        !matches!(self, CategoryStatus::Good)
    }
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CategoryStatus::Good => "good",
            CategoryStatus::Warning => "warning",
            CategoryStatus::Poor => "poor",
        };
        write!(f, "{}", s)
    }
}

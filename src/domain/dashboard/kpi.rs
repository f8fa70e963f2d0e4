use serde::{Deserialize, Serialize};

use crate::domain::foundation::{KpiId, KpiStatus};

/// Direction of a KPI compared to the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// A headline metric tile: current value against a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub id: KpiId,
    pub title: String,
    pub current: f64,
    pub target: f64,
    /// Formatted `current`, e.g. `$12,000`
    pub display: String,
    /// Period-over-period change label, e.g. `+8%`
    pub change: String,
    pub trend: Trend,
    /// Stored status; may differ from [`Kpi::derived_status`]
    pub status: KpiStatus,
}

impl Kpi {
    /// `current / target`, or `None` when the target is zero.
    pub fn attainment(&self) -> Option<f64> {
        (self.target > 0.0).then(|| self.current / self.target)
    }

    /// Status implied by the attainment thresholds.
    ///
    /// Not written back: scenario changes keep the stored status.
    pub fn derived_status(&self) -> KpiStatus {
        self.attainment()
            .map(KpiStatus::from_attainment)
            .unwrap_or(KpiStatus::Good)
    }

    /// Returns true if the stored status disagrees with the thresholds.
    pub fn status_is_stale(&self) -> bool {
        self.status != self.derived_status()
    }
}

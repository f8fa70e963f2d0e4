use serde::Serialize;

use crate::domain::foundation::{round_cents, CategoryId, CategoryStatus, KpiId};

use super::DashboardState;

/// Baseline vs current view shown while before/after mode is on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeforeAfterComparison {
    pub categories: Vec<CategoryDelta>,
    pub kpis: Vec<KpiDelta>,
    pub summary: ComparisonSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDelta {
    pub id: CategoryId,
    pub name: String,
    pub sales_before: f64,
    pub sales_after: f64,
    pub delta: f64,
    pub status_before: CategoryStatus,
    pub status_after: CategoryStatus,
}

impl CategoryDelta {
    /// Relative change in sales, or `None` when there were no sales before.
    pub fn change_ratio(&self) -> Option<f64> {
        (self.sales_before > 0.0).then(|| self.delta / self.sales_before)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiDelta {
    pub id: KpiId,
    pub title: String,
    pub display_before: String,
    pub display_after: String,
    pub delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub total_sales_before: f64,
    pub total_sales_after: f64,
    pub applied_count: usize,
    /// Categories whose status moved
    pub status_changes: usize,
}

impl BeforeAfterComparison {
    /// Compares `current` against `baseline`, matching records by id.
    ///
    /// Records missing from `baseline` are compared against zero.
    pub fn between(baseline: &DashboardState, current: &DashboardState) -> Self {
        let categories: Vec<CategoryDelta> = current
            .categories
            .iter()
            .map(|after| {
                let before = baseline.categories.iter().find(|c| c.id == after.id);
                let sales_before = before.map_or(0.0, |c| c.sales);
                CategoryDelta {
                    id: after.id.clone(),
                    name: after.name.clone(),
                    sales_before,
                    sales_after: after.sales,
                    delta: round_cents(after.sales - sales_before),
                    status_before: before.map_or(after.status, |c| c.status),
                    status_after: after.status,
                }
            })
            .collect();

        let kpis = current
            .kpis
            .iter()
            .map(|after| {
                let before = baseline.kpis.iter().find(|k| k.id == after.id);
                KpiDelta {
                    id: after.id.clone(),
                    title: after.title.clone(),
                    display_before: before.map_or_else(String::new, |k| k.display.clone()),
                    display_after: after.display.clone(),
                    delta: round_cents(after.current - before.map_or(0.0, |k| k.current)),
                }
            })
            .collect();

        let summary = ComparisonSummary {
            total_sales_before: baseline.total_sales(),
            total_sales_after: current.total_sales(),
            applied_count: current.applied_recommendations.len(),
            status_changes: categories
                .iter()
                .filter(|c| c.status_before != c.status_after)
                .count(),
        };

        Self {
            categories,
            kpis,
            summary,
        }
    }

    /// Categories whose sales changed.
    pub fn changed_categories(&self) -> impl Iterator<Item = &CategoryDelta> {
        self.categories.iter().filter(|c| c.delta != 0.0)
    }
}

#[cfg(test)]
#[path = "comparison_test.rs"]
mod comparison_test;

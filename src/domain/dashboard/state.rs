//! The dashboard aggregate root and its validation rules.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::domain::foundation::{RecommendationId, ValidationError};

use super::{Category, Kpi, Leaderboard, Recommendation, Scenario};

/// Everything the dashboard shows.
///
/// The store hands out owned clones of this value; a snapshot never
/// aliases the store's internal state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub kpis: Vec<Kpi>,
    pub categories: Vec<Category>,
    pub recommendations: Vec<Recommendation>,
    pub leaderboard: Leaderboard,
    #[serde(default)]
    pub current_scenario: Scenario,
    #[serde(default)]
    pub is_before_after_mode: bool,
    #[serde(default)]
    pub applied_recommendations: BTreeSet<RecommendationId>,
}

impl DashboardState {
    /// Finds a KPI by id.
    pub fn kpi(&self, id: &str) -> Option<&Kpi> {
        self.kpis.iter().find(|k| k.id.as_str() == id)
    }

    /// Finds a category by display name.
    pub fn category_named(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Finds a recommendation by id.
    pub fn recommendation(&self, id: &RecommendationId) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| &r.id == id)
    }

    /// Returns true if `id` has been applied since the last reset.
    pub fn is_applied(&self, id: &RecommendationId) -> bool {
        self.applied_recommendations.contains(id)
    }

    /// Recommendations not yet applied, highest priority first.
    pub fn pending_recommendations(&self) -> Vec<&Recommendation> {
        let mut pending: Vec<&Recommendation> = self
            .recommendations
            .iter()
            .filter(|r| !self.is_applied(&r.id))
            .collect();
        pending.sort_by_key(|r| r.priority);
        pending
    }

    /// Sum of category sales.
    pub fn total_sales(&self) -> f64 {
        self.categories.iter().map(|c| c.sales).sum()
    }

    /// Checks that a loaded dataset is usable as a baseline.
    ///
    /// Rejects blank or duplicate ids, negative figures, recommendations
    /// pointing at missing categories, a non-empty applied set, and any
    /// scenario or view mode other than the defaults.
    pub fn validate_fixture(&self) -> Result<(), ValidationError> {
        let mut kpi_ids = HashSet::new();
        for kpi in &self.kpis {
            if kpi.id.is_blank() {
                return Err(ValidationError::empty_field("kpi_id"));
            }
            if !kpi_ids.insert(kpi.id.as_str()) {
                return Err(ValidationError::duplicate("kpi id", kpi.id.as_str()));
            }
            non_negative(&format!("kpi '{}' current", kpi.id), kpi.current)?;
            non_negative(&format!("kpi '{}' target", kpi.id), kpi.target)?;
        }

        let mut category_ids = HashSet::new();
        let mut category_names = HashSet::new();
        for category in &self.categories {
            if category.id.is_blank() {
                return Err(ValidationError::empty_field("category_id"));
            }
            if !category_ids.insert(category.id.as_str()) {
                return Err(ValidationError::duplicate("category id", category.id.as_str()));
            }
            if !category_names.insert(category.name.as_str()) {
                return Err(ValidationError::duplicate("category name", &category.name));
            }
            non_negative(&format!("category '{}' sales", category.id), category.sales)?;
            non_negative(&format!("category '{}' target", category.id), category.target)?;
        }

        let mut recommendation_ids = HashSet::new();
        for recommendation in &self.recommendations {
            if recommendation.id.is_blank() {
                return Err(ValidationError::empty_field("recommendation_id"));
            }
            if !recommendation_ids.insert(recommendation.id.as_str()) {
                return Err(ValidationError::duplicate(
                    "recommendation id",
                    recommendation.id.as_str(),
                ));
            }
            if !category_names.contains(recommendation.category.as_str()) {
                return Err(ValidationError::unknown_reference(
                    "recommendation category",
                    &recommendation.category,
                ));
            }
        }

        if !self.applied_recommendations.is_empty() {
            return Err(ValidationError::invalid_format(
                "applied_recommendations",
                "baseline must not start with applied recommendations",
            ));
        }
        if self.current_scenario != Scenario::NormalDay {
            return Err(ValidationError::invalid_format(
                "current_scenario",
                format!(
                    "baseline must be a {} (got {})",
                    Scenario::NormalDay,
                    self.current_scenario
                ),
            ));
        }
        if self.is_before_after_mode {
            return Err(ValidationError::invalid_format(
                "is_before_after_mode",
                "baseline must not start in before/after mode",
            ));
        }

        Ok(())
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::out_of_range(field, 0.0, f64::MAX, value));
    }
    Ok(())
}

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

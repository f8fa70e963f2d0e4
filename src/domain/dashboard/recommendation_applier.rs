//! Applies a recommendation to the category it targets.

use crate::domain::foundation::{Multiplier, RecommendationId};

use super::DashboardState;

/// What happened when a recommendation was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// The recommendation was applied.
    ///
    /// `category` is `None` if no category carries the target name; the id
    /// is still recorded as applied.
    Applied {
        category: Option<String>,
        sales_before: f64,
        sales_after: f64,
    },
    /// Already in the applied set; nothing changed.
    AlreadyApplied,
    /// No recommendation with that id; nothing changed.
    UnknownRecommendation,
}

impl ApplyOutcome {
    /// Returns true if the state changed.
    pub fn changed(&self) -> bool {
        matches!(self, ApplyOutcome::Applied { .. })
    }
}

/// Applies recommendation `id` to `state`.
///
/// Unknown and already-applied ids return an unchanged copy. Otherwise the
/// id joins the applied set and only the category whose name matches the
/// recommendation's target has its sales scaled by `uplift` and its status
/// forced to good.
pub fn apply_recommendation(
    state: &DashboardState,
    id: &RecommendationId,
    uplift: Multiplier,
) -> (DashboardState, ApplyOutcome) {
    if state.is_applied(id) {
        tracing::debug!(recommendation = %id, "Recommendation already applied");
        return (state.clone(), ApplyOutcome::AlreadyApplied);
    }

    let Some(recommendation) = state.recommendation(id) else {
        tracing::debug!(recommendation = %id, "Ignoring unknown recommendation");
        return (state.clone(), ApplyOutcome::UnknownRecommendation);
    };
    let target = recommendation.category.clone();

    let mut next = state.clone();
    next.applied_recommendations.insert(id.clone());

    let mut outcome = ApplyOutcome::Applied {
        category: None,
        sales_before: 0.0,
        sales_after: 0.0,
    };
    for category in next.categories.iter_mut().filter(|c| c.name == target) {
        let boosted = category.boosted(uplift);
        outcome = ApplyOutcome::Applied {
            category: Some(category.name.clone()),
            sales_before: category.sales,
            sales_after: boosted.sales,
        };
        *category = boosted;
    }

    if let ApplyOutcome::Applied { category: None, .. } = &outcome {
        tracing::warn!(
            recommendation = %id,
            category = %target,
            "Recommendation targets a category that is not on the dashboard"
        );
    }

    (next, outcome)
}

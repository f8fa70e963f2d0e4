//! Dashboard store: a single-writer state machine over [`DashboardState`].
//!
//! The store owns two copies of the data: the injected baseline, which is
//! never modified, and the current state. Every dispatch replaces the
//! current state and returns an owned snapshot of it, so callers never
//! hold references into store-owned containers.

use crate::domain::foundation::{DashboardId, Multiplier};

use super::comparison::BeforeAfterComparison;
use super::recommendation_applier::{apply_recommendation, ApplyOutcome};
use super::scenario_adjuster::scale_kpis;
use super::{DashboardAction, DashboardChange, DashboardEvent, DashboardState, FormatPolicy};

/// Tunables for the store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSettings {
    /// Factor applied to a category's sales when a recommendation lands.
    pub uplift: Multiplier,
    /// How KPI values are rendered after a scenario change.
    pub formats: FormatPolicy,
}

impl StoreSettings {
    /// Default uplift for an applied recommendation.
    pub const DEFAULT_UPLIFT: f64 = 1.2;
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            uplift: Multiplier::try_new(Self::DEFAULT_UPLIFT).unwrap_or_default(),
            formats: FormatPolicy::default(),
        }
    }
}

/// Holds the dashboard state and applies actions to it one at a time.
#[derive(Debug, Clone)]
pub struct DashboardStore {
    id: DashboardId,
    baseline: DashboardState,
    state: DashboardState,
    settings: StoreSettings,
    domain_events: Vec<DashboardEvent>,
}

impl DashboardStore {
    /// Creates a store whose current state starts as `baseline`.
    pub fn new(baseline: DashboardState, settings: StoreSettings) -> Self {
        let id = DashboardId::new();
        tracing::debug!(
            dashboard_id = %id,
            kpis = baseline.kpis.len(),
            categories = baseline.categories.len(),
            recommendations = baseline.recommendations.len(),
            "Dashboard store created"
        );
        Self {
            id,
            state: baseline.clone(),
            baseline,
            settings,
            domain_events: Vec::new(),
        }
    }

    /// Creates a store over the built-in fixture with default settings.
    pub fn with_fixture() -> Self {
        Self::new(super::fixtures::initial_state(), StoreSettings::default())
    }

    pub fn id(&self) -> DashboardId {
        self.id
    }

    /// Borrow of the current state.
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> DashboardState {
        self.state.clone()
    }

    /// The injected baseline.
    pub fn baseline(&self) -> &DashboardState {
        &self.baseline
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Baseline vs current comparison.
    pub fn comparison(&self) -> BeforeAfterComparison {
        BeforeAfterComparison::between(&self.baseline, &self.state)
    }

    /// Takes accumulated domain events, clearing the internal buffer.
    pub fn take_events(&mut self) -> Vec<DashboardEvent> {
        std::mem::take(&mut self.domain_events)
    }

    /// Applies `action` and returns a snapshot of the resulting state.
    ///
    /// Total: no action fails. Unknown or repeated recommendation ids
    /// leave the state unchanged and record no event.
    pub fn dispatch(&mut self, action: DashboardAction) -> DashboardState {
        tracing::debug!(dashboard_id = %self.id, action = action.name(), "Dispatching action");

        match action {
            DashboardAction::LoadData => {
                self.state = self.baseline.clone();
                self.record_event(DashboardChange::Loaded);
            }
            DashboardAction::ApplyRecommendation(id) => {
                let (next, outcome) = apply_recommendation(&self.state, &id, self.settings.uplift);
                if let ApplyOutcome::Applied {
                    category,
                    sales_before,
                    sales_after,
                } = outcome
                {
                    self.state = next;
                    tracing::info!(
                        recommendation = %id,
                        category = category.as_deref().unwrap_or("-"),
                        sales_before,
                        sales_after,
                        "Recommendation applied"
                    );
                    self.record_event(DashboardChange::RecommendationApplied {
                        recommendation_id: id,
                        category,
                        sales_before,
                        sales_after,
                    });
                }
            }
            DashboardAction::ToggleBeforeAfter => {
                self.state.is_before_after_mode = !self.state.is_before_after_mode;
                let enabled = self.state.is_before_after_mode;
                self.record_event(DashboardChange::BeforeAfterToggled { enabled });
            }
            DashboardAction::SetScenario(scenario) => {
                let from = self.state.current_scenario;
                self.state.kpis = scale_kpis(&self.baseline.kpis, scenario, &self.settings.formats);
                self.state.current_scenario = scenario;
                tracing::info!(from = %from, to = %scenario, "Scenario changed");
                self.record_event(DashboardChange::ScenarioChanged {
                    from,
                    to: scenario,
                    multiplier: scenario.multiplier().value(),
                });
            }
            DashboardAction::ResetData => {
                let cleared_recommendations = self.state.applied_recommendations.len();
                self.state = self.baseline.clone();
                tracing::info!(cleared_recommendations, "Dashboard reset");
                self.record_event(DashboardChange::Reset {
                    cleared_recommendations,
                });
            }
        }

        self.snapshot()
    }

    fn record_event(&mut self, change: DashboardChange) {
        self.domain_events.push(DashboardEvent::new(self.id, change));
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

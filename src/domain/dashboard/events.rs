//! Dashboard domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DashboardId, DomainEvent, EventId, RecommendationId, Timestamp};

use super::Scenario;

/// A state change recorded by the dashboard store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardEvent {
    pub event_id: EventId,
    pub dashboard_id: DashboardId,
    pub occurred_at: Timestamp,
    #[serde(flatten)]
    pub change: DashboardChange,
}

/// What changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardChange {
    /// State was replaced with the baseline.
    Loaded,

    /// A recommendation was applied.
    RecommendationApplied {
        recommendation_id: RecommendationId,
        category: Option<String>,
        sales_before: f64,
        sales_after: f64,
    },

    /// The before/after comparison view was switched.
    BeforeAfterToggled { enabled: bool },

    /// KPIs were rescaled for a new scenario.
    ScenarioChanged {
        from: Scenario,
        to: Scenario,
        multiplier: f64,
    },

    /// State was reset to the baseline, clearing applied recommendations.
    Reset { cleared_recommendations: usize },
}

impl DashboardEvent {
    pub fn new(dashboard_id: DashboardId, change: DashboardChange) -> Self {
        Self {
            event_id: EventId::new(),
            dashboard_id,
            occurred_at: Timestamp::now(),
            change,
        }
    }
}

impl DomainEvent for DashboardEvent {
    fn event_type(&self) -> &'static str {
        match self.change {
            DashboardChange::Loaded => "dashboard.loaded.v1",
            DashboardChange::RecommendationApplied { .. } => "dashboard.recommendation_applied.v1",
            DashboardChange::BeforeAfterToggled { .. } => "dashboard.before_after_toggled.v1",
            DashboardChange::ScenarioChanged { .. } => "dashboard.scenario_changed.v1",
            DashboardChange::Reset { .. } => "dashboard.reset.v1",
        }
    }

    fn aggregate_id(&self) -> String {
        self.dashboard_id.to_string()
    }

    fn aggregate_type(&self) -> &'static str {
        "Dashboard"
    }

    fn occurred_at(&self) -> Timestamp {
        self.occurred_at
    }

    fn event_id(&self) -> EventId {
        self.event_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SerializableDomainEvent;

    #[test]
    fn event_type_follows_change() {
        let id = DashboardId::new();
        let toggled =
            DashboardEvent::new(id, DashboardChange::BeforeAfterToggled { enabled: true });
        let reset = DashboardEvent::new(
            id,
            DashboardChange::Reset {
                cleared_recommendations: 2,
            },
        );

        assert_eq!(toggled.event_type(), "dashboard.before_after_toggled.v1");
        assert_eq!(reset.event_type(), "dashboard.reset.v1");
        assert_eq!(reset.aggregate_type(), "Dashboard");
        assert_eq!(reset.aggregate_id(), id.to_string());
    }

    #[test]
    fn envelope_payload_flattens_change() {
        let event = DashboardEvent::new(
            DashboardId::new(),
            DashboardChange::ScenarioChanged {
                from: Scenario::NormalDay,
                to: Scenario::HotDay,
                multiplier: 1.3,
            },
        );

        let envelope = event.to_envelope().unwrap();

        assert_eq!(envelope.event_type, "dashboard.scenario_changed.v1");
        assert_eq!(envelope.payload["kind"], "scenario_changed");
        assert_eq!(envelope.payload["to"], "Hot Day");

        let restored: DashboardEvent = envelope.payload_as().unwrap();
        assert_eq!(restored, event);
    }
}

//! GetDashboardHandler - Query handler for the current dashboard view.

use serde::Serialize;

use crate::domain::dashboard::{BeforeAfterComparison, DashboardState};

use super::SharedDashboardStore;

/// Query for the current dashboard.
#[derive(Debug, Clone, Default)]
pub struct GetDashboardQuery {
    /// Include the baseline comparison even when before/after mode is off.
    pub force_comparison: bool,
}

/// What a view renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub state: DashboardState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<BeforeAfterComparison>,
}

pub type GetDashboardResult = DashboardView;

/// Handler for reading the dashboard.
pub struct GetDashboardHandler {
    store: SharedDashboardStore,
}

impl GetDashboardHandler {
    pub fn new(store: SharedDashboardStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetDashboardQuery) -> GetDashboardResult {
        let store = self.store.lock().await;
        let state = store.snapshot();
        let comparison = (query.force_comparison || state.is_before_after_mode)
            .then(|| store.comparison());

        DashboardView { state, comparison }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dashboard::{initial_state, DashboardAction, DashboardStore};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    fn shared_store() -> SharedDashboardStore {
        Arc::new(Mutex::new(DashboardStore::with_fixture()))
    }

    #[tokio::test]
    async fn returns_snapshot_without_comparison_by_default() {
        let handler = GetDashboardHandler::new(shared_store());

        let view = handler.handle(GetDashboardQuery::default()).await;

        assert_eq!(view.state, initial_state());
        assert!(view.comparison.is_none());
    }

    #[tokio::test]
    async fn includes_comparison_in_before_after_mode() {
        let store = shared_store();
        store.lock().await.dispatch(DashboardAction::ToggleBeforeAfter);
        let handler = GetDashboardHandler::new(store);

        let view = handler.handle(GetDashboardQuery::default()).await;

        assert!(view.comparison.is_some());
    }

    #[tokio::test]
    async fn comparison_can_be_forced() {
        let handler = GetDashboardHandler::new(shared_store());

        let view = handler
            .handle(GetDashboardQuery {
                force_comparison: true,
            })
            .await;

        assert_eq!(view.comparison.unwrap().summary.applied_count, 0);
    }

    #[tokio::test]
    async fn view_serializes_camel_case() {
        let handler = GetDashboardHandler::new(shared_store());

        let view = handler.handle(GetDashboardQuery::default()).await;
        let json = serde_json::to_value(view).unwrap();

        assert_eq!(json["state"]["currentScenario"], "Normal Day");
        assert_eq!(json["state"]["isBeforeAfterMode"], false);
        assert!(json.get("comparison").is_none());
    }
}

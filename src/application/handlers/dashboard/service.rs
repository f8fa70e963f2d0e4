//! DashboardService - one dashboard, its handlers and its event publisher.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::dashboard::{DashboardAction, DashboardState, DashboardStore, StoreSettings};
use crate::domain::foundation::{CommandMetadata, DashboardId, DomainError};
use crate::ports::{EventPublisher, FixtureSource};

use super::{
    DashboardView, DispatchActionCommand, DispatchActionHandler, DispatchActionResult,
    GetDashboardHandler, GetDashboardQuery, SharedDashboardStore,
};

/// Async entry point for callers that share a dashboard.
///
/// Dispatches are serialized by the store mutex and applied in the order
/// they acquire it.
pub struct DashboardService {
    id: DashboardId,
    store: SharedDashboardStore,
    dispatch_handler: DispatchActionHandler,
    view_handler: GetDashboardHandler,
}

impl DashboardService {
    pub fn new(store: DashboardStore, event_publisher: Arc<dyn EventPublisher>) -> Self {
        let id = store.id();
        let store: SharedDashboardStore = Arc::new(Mutex::new(store));
        Self {
            id,
            dispatch_handler: DispatchActionHandler::new(store.clone(), event_publisher),
            view_handler: GetDashboardHandler::new(store.clone()),
            store,
        }
    }

    /// Loads the baseline from `source` and builds a service over it.
    pub async fn from_source(
        source: &dyn FixtureSource,
        settings: StoreSettings,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Result<Self, DomainError> {
        let baseline = source.load().await?;
        tracing::info!(source = %source.describe(), "Dashboard baseline loaded");
        Ok(Self::new(DashboardStore::new(baseline, settings), event_publisher))
    }

    pub fn id(&self) -> DashboardId {
        self.id
    }

    /// Applies `command` and publishes the events it produced.
    pub async fn dispatch(
        &self,
        command: DispatchActionCommand,
        metadata: CommandMetadata,
    ) -> Result<DispatchActionResult, DomainError> {
        self.dispatch_handler.handle(command, metadata).await
    }

    /// Applies each action in turn, stopping at the first publish failure.
    ///
    /// All actions share one correlation id.
    pub async fn dispatch_all(
        &self,
        actions: impl IntoIterator<Item = DashboardAction>,
        metadata: CommandMetadata,
    ) -> Result<DashboardState, DomainError> {
        let metadata = metadata.ensure_correlation_id();
        let mut last = None;
        for action in actions {
            let result = self
                .dispatch(DispatchActionCommand::new(action), metadata.clone())
                .await?;
            last = Some(result.snapshot);
        }
        match last {
            Some(snapshot) => Ok(snapshot),
            None => Ok(self.snapshot().await),
        }
    }

    /// Owned copy of the current state.
    pub async fn snapshot(&self) -> DashboardState {
        self.store.lock().await.snapshot()
    }

    pub async fn view(&self, query: GetDashboardQuery) -> DashboardView {
        self.view_handler.handle(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryEventBus, StaticFixtureSource};
    use crate::domain::dashboard::{initial_state, Scenario};
    use crate::domain::foundation::{ErrorCode, RecommendationId};
    use crate::ports::FixtureError;
    use async_trait::async_trait;
    use std::path::PathBuf;

    struct MissingFixture;

    #[async_trait]
    impl FixtureSource for MissingFixture {
        async fn load(&self) -> Result<DashboardState, FixtureError> {
            Err(FixtureError::NotFound(PathBuf::from("day.yaml")))
        }

        fn describe(&self) -> String {
            "missing".to_string()
        }
    }

    async fn service(bus: Arc<InMemoryEventBus>) -> DashboardService {
        DashboardService::from_source(&StaticFixtureSource::new(), StoreSettings::default(), bus)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn from_source_starts_at_baseline() {
        let service = service(Arc::new(InMemoryEventBus::new())).await;

        assert_eq!(service.snapshot().await, initial_state());
    }

    #[tokio::test]
    async fn from_source_propagates_fixture_errors() {
        let result = DashboardService::from_source(
            &MissingFixture,
            StoreSettings::default(),
            Arc::new(InMemoryEventBus::new()),
        )
        .await;

        assert_eq!(result.err().map(|e| e.code), Some(ErrorCode::FixtureUnavailable));
    }

    #[tokio::test]
    async fn dispatch_all_shares_correlation_id() {
        let bus = Arc::new(InMemoryEventBus::new());
        let service = service(bus.clone()).await;

        let state = service
            .dispatch_all(
                vec![
                    DashboardAction::ApplyRecommendation(
                        RecommendationId::new("drink_combo_hot").unwrap(),
                    ),
                    DashboardAction::SetScenario(Scenario::HotDay),
                ],
                CommandMetadata::new().with_correlation_id("batch-1"),
            )
            .await
            .unwrap();

        assert_eq!(state.current_scenario, Scenario::HotDay);
        let events = bus.events_for_aggregate(&service.id().to_string());
        assert_eq!(events.len(), 2);
        assert!(events
            .iter()
            .all(|e| e.metadata.correlation_id.as_deref() == Some("batch-1")));
    }

    #[tokio::test]
    async fn dispatch_all_with_no_actions_returns_current_state() {
        let service = service(Arc::new(InMemoryEventBus::new())).await;

        let state = service
            .dispatch_all(Vec::new(), CommandMetadata::new())
            .await
            .unwrap();

        assert_eq!(state, initial_state());
    }

    #[tokio::test]
    async fn concurrent_dispatches_are_serialized() {
        let bus = Arc::new(InMemoryEventBus::new());
        let service = Arc::new(service(bus.clone()).await);

        let tasks: Vec<_> = ["coffee_bundle", "dessert_discount", "drink_combo_hot"]
            .into_iter()
            .map(|id| {
                let service = service.clone();
                tokio::spawn(async move {
                    let action =
                        DashboardAction::ApplyRecommendation(RecommendationId::new(id).unwrap());
                    service
                        .dispatch(DispatchActionCommand::new(action), CommandMetadata::new())
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(service.snapshot().await.applied_recommendations.len(), 3);
        assert_eq!(bus.event_count(), 3);
    }
}

//! DispatchActionHandler - Command handler applying one action to the store.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::dashboard::{DashboardAction, DashboardEvent, DashboardState};
use crate::domain::foundation::{
    CommandMetadata, DomainError, ErrorCode, EventEnvelope, SerializableDomainEvent,
};
use crate::ports::EventPublisher;

use super::SharedDashboardStore;

/// Command to apply a single action.
#[derive(Debug, Clone)]
pub struct DispatchActionCommand {
    pub action: DashboardAction,
}

impl DispatchActionCommand {
    pub fn new(action: DashboardAction) -> Self {
        Self { action }
    }
}

/// Result of a dispatch.
#[derive(Debug, Clone)]
pub struct DispatchActionResult {
    /// State right after this action.
    pub snapshot: DashboardState,
    /// Events recorded by this action, in order. Empty for no-ops.
    pub events: Vec<DashboardEvent>,
}

/// Handler for dispatching actions.
///
/// Dispatches are sequenced: each one applies its action and publishes its
/// events before the next one starts, so subscribers see events in the
/// order the store applied them. The store lock itself is held only while
/// the action is applied, so readers are not blocked by a slow publisher.
/// If publishing fails the state change stands and the error is returned.
pub struct DispatchActionHandler {
    store: SharedDashboardStore,
    event_publisher: Arc<dyn EventPublisher>,
    sequence: Mutex<()>,
}

impl DispatchActionHandler {
    pub fn new(store: SharedDashboardStore, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            event_publisher,
            sequence: Mutex::new(()),
        }
    }

    pub async fn handle(
        &self,
        cmd: DispatchActionCommand,
        metadata: CommandMetadata,
    ) -> Result<DispatchActionResult, DomainError> {
        let metadata = metadata.ensure_correlation_id();
        let action_name = cmd.action.name();

        // Held until publishing is done
        let _turn = self.sequence.lock().await;

        // 1. Apply under the store lock
        let (snapshot, events) = {
            let mut store = self.store.lock().await;
            let snapshot = store.dispatch(cmd.action);
            (snapshot, store.take_events())
        };

        tracing::debug!(
            action = action_name,
            events = events.len(),
            correlation_id = metadata.correlation_id().unwrap_or_default(),
            "Action dispatched"
        );

        // 2. Publish
        if !events.is_empty() {
            let envelopes = events
                .iter()
                .map(|event| to_envelope(event, &metadata))
                .collect::<Result<Vec<_>, _>>()?;
            self.event_publisher.publish_all(envelopes).await?;
        }

        Ok(DispatchActionResult { snapshot, events })
    }
}

fn to_envelope(
    event: &DashboardEvent,
    metadata: &CommandMetadata,
) -> Result<EventEnvelope, DomainError> {
    let envelope = event.to_envelope().map_err(|e| {
        DomainError::new(
            ErrorCode::EventPublishFailed,
            format!("Failed to serialize event: {}", e),
        )
    })?;
    Ok(metadata.stamp(envelope))
}

//! EventSubscriber port - Interface for subscribing to domain events.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handler for processing domain events.
///
/// Implementations should be idempotent: the same envelope may be
/// delivered more than once.
///
/// # Example
///
/// ```ignore
/// struct AppliedCounter { count: AtomicUsize }
///
/// #[async_trait]
/// impl EventHandler for AppliedCounter {
///     async fn handle(&self, _event: EventEnvelope) -> Result<(), DomainError> {
///         self.count.fetch_add(1, Ordering::SeqCst);
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "AppliedCounter"
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Process an event.
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}

/// Port for subscribing to domain events.
///
/// ```ignore
/// subscriber.subscribe("dashboard.recommendation_applied.v1", counter);
/// subscriber.subscribe_all(&["dashboard.reset.v1", "dashboard.loaded.v1"], auditor);
/// ```
pub trait EventSubscriber: Send + Sync {
    /// Subscribe handler to a specific event type.
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    /// Subscribe handler to multiple event types.
    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>);
}

/// Combined trait for event bus implementations.
pub trait EventBus: super::EventPublisher + EventSubscriber {}

impl<T: super::EventPublisher + EventSubscriber> EventBus for T {}

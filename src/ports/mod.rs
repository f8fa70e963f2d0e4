//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `EventPublisher` - Publishing dashboard events
//! - `EventSubscriber` / `EventHandler` - Reacting to published events
//! - `FixtureSource` - Supplying the baseline dashboard state

mod event_publisher;
mod event_subscriber;
mod fixture_source;

pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
pub use fixture_source::{FixtureError, FixtureSource};

//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, status enums, errors and the
//! event infrastructure that form the vocabulary of the dashboard domain.

mod command;
mod errors;
mod events;
mod ids;
mod multiplier;
mod status;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent};
pub use ids::{CategoryId, DashboardId, KpiId, RecommendationId};
pub use multiplier::{round_cents, Multiplier};
pub use status::{CategoryStatus, KpiStatus, ON_TARGET_RATIO, WARNING_RATIO};
pub use timestamp::Timestamp;

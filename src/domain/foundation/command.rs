//! Command metadata carried from the caller into emitted events.
//!
//! Handlers accept a single `CommandMetadata` instead of loose
//! correlation/source parameters, and copy it onto every event envelope
//! they publish.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EventEnvelope;

/// Metadata context for command handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Links every event produced by one command.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Source of this command (e.g., "cli", "test").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns a copy with a correlation ID, generating one if not set.
    ///
    /// Call once per command so all of its events share the same ID.
    pub fn ensure_correlation_id(mut self) -> Self {
        if self.correlation_id.is_none() {
            self.correlation_id = Some(Uuid::new_v4().to_string());
        }
        self
    }

    /// Returns the correlation ID only if set.
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    /// Returns the source if set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Copies this metadata onto an outgoing envelope.
    pub fn stamp(&self, mut envelope: EventEnvelope) -> EventEnvelope {
        if let Some(id) = &self.correlation_id {
            envelope = envelope.with_correlation_id(id.clone());
        }
        if let Some(source) = &self.source {
            envelope = envelope.with_source(source.clone());
        }
        envelope
    }
}

#[cfg(test)]
impl CommandMetadata {
    /// Creates a test fixture with fixed correlation and source.
    pub fn test_fixture() -> Self {
        Self::new()
            .with_correlation_id("test-correlation-id")
            .with_source("test")
    }
}

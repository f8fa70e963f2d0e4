//! FixtureSource port - where the dashboard baseline comes from.

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::dashboard::DashboardState;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Supplies the baseline state a [`DashboardStore`] is built over.
///
/// [`DashboardStore`]: crate::domain::dashboard::DashboardStore
#[async_trait]
pub trait FixtureSource: Send + Sync {
    /// Loads and validates the baseline.
    async fn load(&self) -> Result<DashboardState, FixtureError>;

    /// Short human-readable description, used in logs.
    fn describe(&self) -> String;
}

/// Errors raised while loading a fixture.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Fixture file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse fixture {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid fixture: {0}")]
    Invalid(#[from] ValidationError),
}

impl From<FixtureError> for DomainError {
    fn from(err: FixtureError) -> Self {
        let code = match &err {
            FixtureError::Invalid(_) => ErrorCode::InvalidFixture,
            _ => ErrorCode::FixtureUnavailable,
        };
        DomainError::new(code, err.to_string())
    }
}

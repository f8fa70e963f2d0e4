//! Loads the dashboard baseline from a YAML file.
//!
//! The file holds a serialized [`DashboardState`] using the same camelCase
//! field names as the JSON snapshots. `currentScenario`,
//! `isBeforeAfterMode` and `appliedRecommendations` may be omitted.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::dashboard::DashboardState;
use crate::ports::{FixtureError, FixtureSource};

/// Reads and validates a fixture file on every `load`.
#[derive(Debug, Clone)]
pub struct YamlFixtureSource {
    path: PathBuf,
}

impl YamlFixtureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, contents: &str) -> Result<DashboardState, FixtureError> {
        let state: DashboardState =
            serde_yaml::from_str(contents).map_err(|e| FixtureError::Parse {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        state.validate_fixture()?;
        Ok(state)
    }
}

#[async_trait]
impl FixtureSource for YamlFixtureSource {
    async fn load(&self) -> Result<DashboardState, FixtureError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => FixtureError::NotFound(self.path.clone()),
                _ => FixtureError::Io {
                    path: self.path.clone(),
                    source,
                },
            })?;

        let state = self.parse(&contents)?;
        tracing::info!(
            path = %self.path.display(),
            kpis = state.kpis.len(),
            categories = state.categories.len(),
            recommendations = state.recommendations.len(),
            "Loaded fixture file"
        );
        Ok(state)
    }

    fn describe(&self) -> String {
        format!("fixture file {}", self.path.display())
    }
}

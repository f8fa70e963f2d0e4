use async_trait::async_trait;

use crate::domain::dashboard::{initial_state, DashboardState};
use crate::ports::{FixtureError, FixtureSource};

/// Serves the built-in baseline day.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticFixtureSource;

impl StaticFixtureSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FixtureSource for StaticFixtureSource {
    async fn load(&self) -> Result<DashboardState, FixtureError> {
        Ok(initial_state())
    }

    fn describe(&self) -> String {
        "built-in fixture".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_the_built_in_baseline() {
        let state = StaticFixtureSource::new().load().await.unwrap();

        assert_eq!(state, initial_state());
        assert!(state.validate_fixture().is_ok());
    }
}

//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `RESTAURANT_DASHBOARD`
//! prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use restaurant_dashboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Uplift factor: {}", config.dashboard.uplift_factor);
//! ```

mod dashboard;
mod error;
mod logging;

pub use dashboard::DashboardConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid setup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Uplift factor, fixture file and KPI display formats
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `RESTAURANT_DASHBOARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RESTAURANT_DASHBOARD__DASHBOARD__UPLIFT_FACTOR=1.3` -> `dashboard.uplift_factor = 1.3`
    /// - `RESTAURANT_DASHBOARD__DASHBOARD__KPI_FORMATS__SALES__KIND=currency`
    /// - `RESTAURANT_DASHBOARD__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RESTAURANT_DASHBOARD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.dashboard.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

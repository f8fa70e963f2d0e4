//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Logging initialisation failed: {0}")]
    LoggingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Uplift factor must be finite, positive and at most 10 (got {0})")]
    InvalidUpliftFactor(f64),

    #[error("Fixture path must not be empty")]
    EmptyFixturePath,

    #[error("KPI format key must not be blank")]
    BlankKpiFormatKey,

    #[error("KPI '{kpi}' asks for {decimals} decimals (at most 6)")]
    TooManyDecimals { kpi: String, decimals: u8 },

    #[error("Invalid log level directive: {0}")]
    InvalidLogLevel(String),
}

//! Dashboard configuration

use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::domain::dashboard::{DisplayFormat, FormatPolicy, StoreSettings};
use crate::domain::foundation::{KpiId, Multiplier};

use super::error::ValidationError;

/// Dashboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Sales factor applied when a recommendation is applied
    #[serde(default = "default_uplift_factor")]
    pub uplift_factor: f64,

    /// YAML fixture file; the built-in fixture is used when unset
    pub fixture_path: Option<PathBuf>,

    /// Per-KPI display format overrides, keyed by KPI id
    #[serde(default)]
    pub kpi_formats: HashMap<String, DisplayFormat>,
}

impl DashboardConfig {
    /// Validate dashboard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.uplift()?;
        if self
            .fixture_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(ValidationError::EmptyFixturePath);
        }
        if self.kpi_formats.keys().any(|k| k.trim().is_empty()) {
            return Err(ValidationError::BlankKpiFormatKey);
        }
        if let Some((kpi, format)) = self
            .kpi_formats
            .iter()
            .find(|(_, f)| f.decimals() > DisplayFormat::MAX_DECIMALS)
        {
            return Err(ValidationError::TooManyDecimals {
                kpi: kpi.clone(),
                decimals: format.decimals(),
            });
        }
        Ok(())
    }

    /// Builds store settings: default formats with the configured overrides.
    pub fn store_settings(&self) -> Result<StoreSettings, ValidationError> {
        let mut formats = FormatPolicy::default();
        let overrides = self
            .kpi_formats
            .iter()
            .map(|(id, format)| {
                KpiId::new(id.as_str())
                    .map(|id| (id, *format))
                    .map_err(|_| ValidationError::BlankKpiFormatKey)
            })
            .collect::<Result<Vec<_>, _>>()?;
        formats.merge(overrides);

        Ok(StoreSettings {
            uplift: self.uplift()?,
            formats,
        })
    }

    fn uplift(&self) -> Result<Multiplier, ValidationError> {
        Multiplier::try_new(self.uplift_factor)
            .map_err(|_| ValidationError::InvalidUpliftFactor(self.uplift_factor))
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            uplift_factor: default_uplift_factor(),
            fixture_path: None,
            kpi_formats: HashMap::new(),
        }
    }
}

fn default_uplift_factor() -> f64 {
    StoreSettings::DEFAULT_UPLIFT
}

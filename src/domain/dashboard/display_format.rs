//! Display formatting policy for KPI values.
//!
//! Each KPI id maps to a [`DisplayFormat`]; ids without an explicit entry
//! use the policy's fallback. The policy is plain data so it can be
//! supplied from configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::KpiId;

/// How a numeric KPI value is rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayFormat {
    /// US dollars with thousands separators, e.g. `$12,000` or `$8.50`.
    Currency {
        #[serde(default)]
        decimals: u8,
    },
    /// Percentage points, e.g. `22%`.
    Percentage {
        #[serde(default)]
        decimals: u8,
    },
    /// Score out of a maximum, e.g. `4.2/5`.
    Rating {
        out_of: u8,
        #[serde(default = "default_rating_decimals")]
        decimals: u8,
    },
}

fn default_rating_decimals() -> u8 {
    1
}

impl DisplayFormat {
    /// Most decimal places a format may request.
    pub const MAX_DECIMALS: u8 = 6;

    pub fn decimals(&self) -> u8 {
        match *self {
            DisplayFormat::Currency { decimals }
            | DisplayFormat::Percentage { decimals }
            | DisplayFormat::Rating { decimals, .. } => decimals,
        }
    }

    /// Renders `value` in this format.
    ///
    /// Decimals above [`DisplayFormat::MAX_DECIMALS`] are clamped.
    pub fn render(&self, value: f64) -> String {
        match *self {
            DisplayFormat::Currency { decimals } => {
                let fixed = fixed_point(value.abs(), decimals);
                let (whole, fraction) = match fixed.split_once('.') {
                    Some((whole, fraction)) => (whole, Some(fraction)),
                    None => (fixed.as_str(), None),
                };
                let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
                let sign = if value < 0.0 && !is_zero { "-" } else { "" };
                let mut out = format!("{}${}", sign, group_thousands(whole));
                if let Some(fraction) = fraction {
                    out.push('.');
                    out.push_str(fraction);
                }
                out
            }
            DisplayFormat::Percentage { decimals } => format!("{}%", fixed_point(value, decimals)),
            DisplayFormat::Rating { out_of, decimals } => {
                format!("{}/{}", fixed_point(value, decimals), out_of)
            }
        }
    }
}

/// Rounds half away from zero before formatting so ties are deterministic.
fn fixed_point(value: f64, decimals: u8) -> String {
    let decimals = decimals.min(DisplayFormat::MAX_DECIMALS);
    let scale = 10f64.powi(i32::from(decimals));
    let rounded = (value * scale).round() / scale;
    format!("{:.*}", usize::from(decimals), rounded)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Maps KPI ids to display formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatPolicy {
    #[serde(default)]
    formats: HashMap<KpiId, DisplayFormat>,
    fallback: DisplayFormat,
}

impl FormatPolicy {
    /// Creates an empty policy that renders everything with `fallback`.
    pub fn new(fallback: DisplayFormat) -> Self {
        Self {
            formats: HashMap::new(),
            fallback,
        }
    }

    /// Builder: set the format for one KPI.
    pub fn with_format(mut self, kpi: KpiId, format: DisplayFormat) -> Self {
        self.formats.insert(kpi, format);
        self
    }

    /// Replaces or adds entries from `overrides`.
    pub fn merge(&mut self, overrides: impl IntoIterator<Item = (KpiId, DisplayFormat)>) {
        self.formats.extend(overrides);
    }

    /// Returns the format used for `kpi`.
    pub fn format_for(&self, kpi: &KpiId) -> DisplayFormat {
        self.formats.get(kpi).copied().unwrap_or(self.fallback)
    }

    /// Renders `value` using the format for `kpi`.
    pub fn render(&self, kpi: &KpiId, value: f64) -> String {
        self.format_for(kpi).render(value)
    }
}

impl Default for FormatPolicy {
    fn default() -> Self {
        Self::new(DisplayFormat::Currency { decimals: 0 })
            .with_format(KpiId::known("sales"), DisplayFormat::Currency { decimals: 0 })
            .with_format(KpiId::known("tickets"), DisplayFormat::Currency { decimals: 2 })
            .with_format(KpiId::known("margin"), DisplayFormat::Percentage { decimals: 0 })
            .with_format(
                KpiId::known("satisfaction"),
                DisplayFormat::Percentage { decimals: 0 },
            )
    }
}

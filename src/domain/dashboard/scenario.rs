//! Day scenarios that scale baseline KPI values.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Multiplier;

/// A named trading condition for the day.
///
/// Serialized as its display label (`"Hot Day"`). Unrecognised labels
/// fall back to [`Scenario::NormalDay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Scenario {
    #[default]
    NormalDay,
    RainyDay,
    HotDay,
    StaffShortage,
    PromoRunning,
}

impl Scenario {
    /// All scenarios in menu order.
    pub const ALL: [Scenario; 5] = [
        Scenario::NormalDay,
        Scenario::RainyDay,
        Scenario::HotDay,
        Scenario::StaffShortage,
        Scenario::PromoRunning,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::NormalDay => "Normal Day",
            Scenario::RainyDay => "Rainy Day",
            Scenario::HotDay => "Hot Day",
            Scenario::StaffShortage => "Staff Shortage",
            Scenario::PromoRunning => "Promo Running",
        }
    }

    /// Factor applied to every baseline KPI `current` value.
    pub fn multiplier(&self) -> Multiplier {
        let factor = match self {
            Scenario::NormalDay => return Multiplier::ONE,
            Scenario::RainyDay => 0.8,
            Scenario::HotDay => 1.3,
            Scenario::StaffShortage => 0.75,
            Scenario::PromoRunning => 1.4,
        };
        Multiplier::try_new(factor).unwrap_or_default()
    }

    /// Looks up a scenario by label, ignoring case, spaces, `-` and `_`.
    ///
    /// Accepts `"Hot Day"`, `"hot_day"`, `"HotDay"` and `"hot-day"` alike.
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = normalize(label);
        Self::ALL
            .into_iter()
            .find(|scenario| normalize(scenario.label()) == wanted)
    }

    /// Like [`Scenario::from_label`] but falls back to `NormalDay`.
    pub fn parse_or_default(label: &str) -> Self {
        Self::from_label(label).unwrap_or_else(|| {
            tracing::warn!(label, "Unrecognised scenario, using Normal Day");
            Scenario::NormalDay
        })
    }
}

fn normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<String> for Scenario {
    fn from(label: String) -> Self {
        Self::parse_or_default(&label)
    }
}

impl From<Scenario> for String {
    fn from(scenario: Scenario) -> Self {
        scenario.label().to_string()
    }
}

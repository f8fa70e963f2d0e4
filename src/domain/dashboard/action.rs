//! The closed set of actions the dashboard store accepts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{RecommendationId, ValidationError};

use super::Scenario;

/// An action issued by the view layer.
///
/// Serialized as `{"type": "APPLY_RECOMMENDATION", "payload": "coffee_bundle"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DashboardAction {
    LoadData,
    ApplyRecommendation(RecommendationId),
    ToggleBeforeAfter,
    SetScenario(Scenario),
    ResetData,
}

impl DashboardAction {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            DashboardAction::LoadData => "load_data",
            DashboardAction::ApplyRecommendation(_) => "apply_recommendation",
            DashboardAction::ToggleBeforeAfter => "toggle_before_after",
            DashboardAction::SetScenario(_) => "set_scenario",
            DashboardAction::ResetData => "reset_data",
        }
    }
}

impl fmt::Display for DashboardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardAction::LoadData => write!(f, "load"),
            DashboardAction::ApplyRecommendation(id) => write!(f, "apply:{}", id),
            DashboardAction::ToggleBeforeAfter => write!(f, "toggle"),
            DashboardAction::SetScenario(scenario) => write!(f, "scenario:{}", scenario),
            DashboardAction::ResetData => write!(f, "reset"),
        }
    }
}

/// Parses the command-line form: `load`, `toggle`, `reset`,
/// `apply:<recommendation id>` or `scenario:<label>`.
///
/// Scenario labels are lenient (see [`Scenario::parse_or_default`]).
impl FromStr for DashboardAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, argument) = match s.split_once(':') {
            Some((verb, argument)) => (verb.trim(), Some(argument.trim())),
            None => (s, None),
        };

        match (verb.to_ascii_lowercase().as_str(), argument) {
            ("load" | "load_data", None) => Ok(DashboardAction::LoadData),
            ("toggle" | "toggle_before_after", None) => Ok(DashboardAction::ToggleBeforeAfter),
            ("reset" | "reset_data", None) => Ok(DashboardAction::ResetData),
            ("apply" | "apply_recommendation", Some(id)) => {
                Ok(DashboardAction::ApplyRecommendation(RecommendationId::new(id)?))
            }
            ("scenario" | "set_scenario", Some(label)) => {
                Ok(DashboardAction::SetScenario(Scenario::parse_or_default(label)))
            }
            _ => Err(ValidationError::invalid_format(
                "action",
                format!("unrecognised action '{}'", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_verbs() {
        assert_eq!("load".parse::<DashboardAction>().unwrap(), DashboardAction::LoadData);
        assert_eq!(
            " toggle ".parse::<DashboardAction>().unwrap(),
            DashboardAction::ToggleBeforeAfter
        );
        assert_eq!("RESET".parse::<DashboardAction>().unwrap(), DashboardAction::ResetData);
    }

    #[test]
    fn parses_apply_with_id() {
        let action: DashboardAction = "apply:dessert_discount".parse().unwrap();
        assert_eq!(
            action,
            DashboardAction::ApplyRecommendation(RecommendationId::new("dessert_discount").unwrap())
        );
    }

    #[test]
    fn parses_scenario_leniently() {
        let hot: DashboardAction = "scenario:Hot Day".parse().unwrap();
        assert_eq!(hot, DashboardAction::SetScenario(Scenario::HotDay));

        let unknown: DashboardAction = "scenario:Eclipse".parse().unwrap();
        assert_eq!(unknown, DashboardAction::SetScenario(Scenario::NormalDay));
    }

    #[test]
    fn rejects_malformed_actions() {
        assert!("dance".parse::<DashboardAction>().is_err());
        assert!("apply".parse::<DashboardAction>().is_err());
        assert!("apply:".parse::<DashboardAction>().is_err());
        assert!("load:now".parse::<DashboardAction>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for action in [
            DashboardAction::LoadData,
            DashboardAction::ToggleBeforeAfter,
            DashboardAction::ResetData,
            DashboardAction::SetScenario(Scenario::StaffShortage),
            DashboardAction::ApplyRecommendation(RecommendationId::new("coffee_bundle").unwrap()),
        ] {
            assert_eq!(action.to_string().parse::<DashboardAction>().unwrap(), action);
        }
    }

    #[test]
    fn deserializes_reducer_shape() {
        let apply: DashboardAction =
            serde_json::from_str(r#"{"type": "APPLY_RECOMMENDATION", "payload": "coffee_bundle"}"#)
                .unwrap();
        assert_eq!(apply.name(), "apply_recommendation");

        let scenario: DashboardAction =
            serde_json::from_str(r#"{"type": "SET_SCENARIO", "payload": "Rainy Day"}"#).unwrap();
        assert_eq!(scenario, DashboardAction::SetScenario(Scenario::RainyDay));

        let reset: DashboardAction = serde_json::from_str(r#"{"type": "RESET_DATA"}"#).unwrap();
        assert_eq!(reset, DashboardAction::ResetData);
    }
}

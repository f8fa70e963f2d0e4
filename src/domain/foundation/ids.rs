//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a dashboard store instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashboardId(Uuid);

impl DashboardId {
    /// Creates a new random DashboardId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DashboardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DashboardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DashboardId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Declares a slug identifier: a non-empty string key taken from fixture data.
macro_rules! slug_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates the identifier, returning error if blank.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Creates the identifier from a compile-time constant.
            pub(crate) fn known(id: &'static str) -> Self {
                Self(id.to_string())
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the identifier is blank (only possible after deserialization).
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

slug_id!(
    /// Identifier of a KPI tile (e.g. `sales`, `margin`).
    KpiId,
    "kpi_id"
);

slug_id!(
    /// Identifier of a menu category (e.g. `desserts`).
    CategoryId,
    "category_id"
);

slug_id!(
    /// Identifier of a recommendation (e.g. `dessert_discount`).
    RecommendationId,
    "recommendation_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_id_generates_unique_values() {
        assert_ne!(DashboardId::new(), DashboardId::new());
    }

    #[test]
    fn dashboard_id_parses_from_string() {
        let id = DashboardId::new();
        let parsed: DashboardId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn slug_ids_reject_blank_values() {
        assert!(KpiId::new("").is_err());
        assert!(CategoryId::new("   ").is_err());
        match RecommendationId::new("") {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "recommendation_id"),
            other => panic!("Expected EmptyField, got {:?}", other),
        }
    }

    #[test]
    fn slug_ids_preserve_value() {
        let id = RecommendationId::new("dessert_discount").unwrap();
        assert_eq!(id.as_str(), "dessert_discount");
        assert_eq!(id.to_string(), "dessert_discount");
    }

    #[test]
    fn slug_ids_serialize_transparently() {
        let id = KpiId::new("sales").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""sales""#);

        let restored: KpiId = serde_json::from_str(r#""margin""#).unwrap();
        assert_eq!(restored.as_str(), "margin");
    }

    #[test]
    fn deserialized_blank_slug_is_detectable() {
        let id: CategoryId = serde_json::from_str(r#""""#).unwrap();
        assert!(id.is_blank());
    }
}

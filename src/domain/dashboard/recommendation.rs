use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::RecommendationId;

/// Urgency of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        };
        write!(f, "{}", s)
    }
}

/// A suggested business action aimed at one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: RecommendationId,
    pub title: String,
    pub description: String,
    /// Name of the category this recommendation boosts
    pub category: String,
    pub priority: Priority,
    /// Expected impact, e.g. `+$800 margin`
    pub impact: String,
}

impl Recommendation {
    /// Returns true if this recommendation targets the category named `name`.
    pub fn targets(&self, name: &str) -> bool {
        self.category == name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priorities_order_high_first() {
        let mut priorities = vec![Priority::Low, Priority::High, Priority::Medium];
        priorities.sort();
        assert_eq!(priorities, vec![Priority::High, Priority::Medium, Priority::Low]);
    }

    #[test]
    fn targets_matches_category_name_exactly() {
        let rec = Recommendation {
            id: RecommendationId::new("coffee_bundle").unwrap(),
            title: "Coffee Bundle Promotion".to_string(),
            description: "Bundle Sandwich + Coffee for $1 upgrade".to_string(),
            category: "Coffee".to_string(),
            priority: Priority::High,
            impact: "+$1,200 margin".to_string(),
        };

        assert!(rec.targets("Coffee"));
        assert!(!rec.targets("coffee"));
        assert_eq!(rec.priority.to_string(), "HIGH");
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CategoryId, CategoryStatus, Multiplier};

/// A menu grouping with sales tracked against a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub sales: f64,
    pub target: f64,
    pub margin_pct: f64,
    /// Share of total sales shown on the chart
    #[serde(default)]
    pub share_pct: f64,
    pub status: CategoryStatus,
}

impl Category {
    /// `sales / target`, or `None` when the target is zero.
    pub fn attainment(&self) -> Option<f64> {
        (self.target > 0.0).then(|| self.sales / self.target)
    }

    /// Status implied by the attainment thresholds.
    pub fn derived_status(&self) -> CategoryStatus {
        self.attainment()
            .map(CategoryStatus::from_attainment)
            .unwrap_or(CategoryStatus::Good)
    }

    /// Returns a copy with sales scaled by `uplift` and status forced to good.
    ///
    /// The status override is the business rule for an applied
    /// recommendation; it does not consult [`Category::derived_status`].
    pub fn boosted(&self, uplift: Multiplier) -> Self {
        Self {
            sales: uplift.apply(self.sales),
            status: CategoryStatus::Good,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desserts() -> Category {
        Category {
            id: CategoryId::new("desserts").unwrap(),
            name: "Desserts".to_string(),
            sales: 1200.0,
            target: 2000.0,
            margin_pct: 45.0,
            share_pct: 10.0,
            status: CategoryStatus::Poor,
        }
    }

    #[test]
    fn derived_status_uses_sales_over_target() {
        assert_eq!(desserts().attainment(), Some(0.6));
        assert_eq!(desserts().derived_status(), CategoryStatus::Poor);
    }

    #[test]
    fn boosted_scales_sales_and_forces_good() {
        let boosted = desserts().boosted(Multiplier::try_new(1.2).unwrap());

        assert_eq!(boosted.sales, 1440.0);
        assert_eq!(boosted.status, CategoryStatus::Good);
        // Thresholds alone would still say poor (1440 / 2000 = 72%)
        assert_eq!(boosted.derived_status(), CategoryStatus::Poor);
        assert_eq!(boosted.target, 2000.0);
        assert_eq!(boosted.name, "Desserts");
    }

    #[test]
    fn share_defaults_when_missing() {
        let json = r#"{
            "id": "fries",
            "name": "Fries",
            "sales": 1800,
            "target": 1500,
            "marginPct": 30,
            "status": "good"
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.share_pct, 0.0);
        assert_eq!(category.margin_pct, 30.0);
    }
}

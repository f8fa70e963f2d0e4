//! Baseline dataset for a normal trading day.

use std::collections::BTreeSet;

use crate::domain::foundation::{CategoryId, CategoryStatus, KpiId, KpiStatus, RecommendationId};

use super::{
    Category, DashboardState, Kpi, Leaderboard, LeaderboardEntry, Priority, Recommendation,
    Scenario, Trend,
};

/// Returns a fresh copy of the baseline dashboard.
///
/// Deterministic: every call yields an equal value.
pub fn initial_state() -> DashboardState {
    DashboardState {
        kpis: vec![
            kpi(
                "sales",
                "Total Sales",
                12000.0,
                11000.0,
                "$12,000",
                "+8%",
                Trend::Up,
                KpiStatus::Good,
            ),
            kpi("tickets", "Avg Ticket", 8.50, 8.00, "$8.50", "+2%", Trend::Up, KpiStatus::Good),
            kpi(
                "margin",
                "Gross Margin",
                22.0,
                25.0,
                "22%",
                "-3%",
                Trend::Down,
                KpiStatus::Warning,
            ),
            kpi(
                "satisfaction",
                "Guest Satisfaction",
                82.0,
                80.0,
                "82%",
                "+5%",
                Trend::Up,
                KpiStatus::Good,
            ),
        ],
        categories: vec![
            category("sandwiches", "Sandwiches", 5000.0, 4500.0, 25.0, 42.0, CategoryStatus::Good),
            category("coffee", "Coffee", 2800.0, 3000.0, 35.0, 23.0, CategoryStatus::Warning),
            category("desserts", "Desserts", 1200.0, 2000.0, 45.0, 10.0, CategoryStatus::Poor),
            category("fries", "Fries", 1800.0, 1500.0, 30.0, 15.0, CategoryStatus::Good),
            category("drinks", "Drinks", 1200.0, 1000.0, 40.0, 10.0, CategoryStatus::Good),
        ],
        recommendations: vec![
            recommendation(
                "coffee_bundle",
                "Coffee Bundle Promotion",
                "Bundle Sandwich + Coffee for $1 upgrade",
                "Coffee",
                Priority::High,
                "+$1,200 margin",
            ),
            recommendation(
                "dessert_discount",
                "Dessert Combo Deal",
                "Offer 10% off Dessert with every Burger",
                "Desserts",
                Priority::Medium,
                "+$800 margin",
            ),
            recommendation(
                "drink_combo_hot",
                "Cold Drink Promotion",
                "Promote Cold Drink Combo with Fries",
                "Drinks",
                Priority::Medium,
                "+$600 margin",
            ),
        ],
        leaderboard: Leaderboard {
            top_performer: LeaderboardEntry::new("Sandwiches", "$5,000"),
            needs_attention: LeaderboardEntry::new("Desserts", "$1,200"),
        },
        current_scenario: Scenario::NormalDay,
        is_before_after_mode: false,
        applied_recommendations: BTreeSet::new(),
    }
}

#[allow(clippy::too_many_arguments)]
fn kpi(
    id: &'static str,
    title: &str,
    current: f64,
    target: f64,
    display: &str,
    change: &str,
    trend: Trend,
    status: KpiStatus,
) -> Kpi {
    Kpi {
        id: KpiId::known(id),
        title: title.to_string(),
        current,
        target,
        display: display.to_string(),
        change: change.to_string(),
        trend,
        status,
    }
}

fn category(
    id: &'static str,
    name: &str,
    sales: f64,
    target: f64,
    margin_pct: f64,
    share_pct: f64,
    status: CategoryStatus,
) -> Category {
    Category {
        id: CategoryId::known(id),
        name: name.to_string(),
        sales,
        target,
        margin_pct,
        share_pct,
        status,
    }
}

fn recommendation(
    id: &'static str,
    title: &str,
    description: &str,
    category: &str,
    priority: Priority,
    impact: &str,
) -> Recommendation {
    Recommendation {
        id: RecommendationId::known(id),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        priority,
        impact: impact.to_string(),
    }
}

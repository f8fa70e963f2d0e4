//! Dashboard module - restaurant performance dashboard state.
//!
//! # Module Organization
//!
//! - `state` - The dashboard aggregate data (KPIs, categories, recommendations)
//! - `fixtures` - Built-in baseline data set
//! - `scenario_adjuster` - Pure KPI scaling for what-if scenarios
//! - `recommendation_applier` - Pure, idempotent recommendation application
//! - `store` - Single-writer state machine dispatching [`DashboardAction`]s
//! - `comparison` - Baseline vs current deltas for before/after mode

mod action;
mod category;
pub mod comparison;
mod display_format;
mod events;
pub mod fixtures;
mod kpi;
mod leaderboard;
mod recommendation;
pub mod recommendation_applier;
mod scenario;
pub mod scenario_adjuster;
mod state;
mod store;

pub use action::DashboardAction;
pub use category::Category;
pub use comparison::{BeforeAfterComparison, CategoryDelta, ComparisonSummary, KpiDelta};
pub use display_format::{DisplayFormat, FormatPolicy};
pub use events::{DashboardChange, DashboardEvent};
pub use fixtures::initial_state;
pub use kpi::{Kpi, Trend};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use recommendation::{Priority, Recommendation};
pub use recommendation_applier::{apply_recommendation, ApplyOutcome};
pub use scenario::Scenario;
pub use scenario_adjuster::{apply_scenario, scale_kpis};
pub use state::DashboardState;
pub use store::{DashboardStore, StoreSettings};

//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dashboard;

pub use dashboard::{
    DashboardService, DashboardView, DispatchActionCommand, DispatchActionHandler,
    DispatchActionResult, GetDashboardHandler, GetDashboardQuery, GetDashboardResult,
    SharedDashboardStore,
};

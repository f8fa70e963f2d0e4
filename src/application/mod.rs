//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    DashboardService, DashboardView, DispatchActionCommand, DispatchActionHandler,
    DispatchActionResult, GetDashboardHandler, GetDashboardQuery, GetDashboardResult,
    SharedDashboardStore,
};

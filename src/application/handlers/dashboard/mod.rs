//! Dashboard command and query handlers.
//!
//! All handlers for one dashboard share a single store behind an async
//! mutex so dispatches are applied one at a time.

mod dispatch_action;
mod get_dashboard;
mod service;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::dashboard::DashboardStore;

pub use dispatch_action::{DispatchActionCommand, DispatchActionHandler, DispatchActionResult};
pub use get_dashboard::{DashboardView, GetDashboardHandler, GetDashboardQuery, GetDashboardResult};
pub use service::DashboardService;

/// A store shared between handlers.
pub type SharedDashboardStore = Arc<Mutex<DashboardStore>>;

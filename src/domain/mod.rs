//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, statuses, errors, events)
//! - `dashboard` - Restaurant dashboard state, scenarios, recommendations and the store

pub mod dashboard;
pub mod foundation;

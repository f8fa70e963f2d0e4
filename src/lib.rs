//! Restaurant Dashboard - state core for a restaurant management dashboard.
//!
//! Holds KPI, category and recommendation data for one trading day, applies
//! recommendations, rescales KPIs for what-if scenarios and produces
//! before/after comparisons. Views consume owned JSON-serializable snapshots.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

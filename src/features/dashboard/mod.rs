//! Dashboard KPIs: totals, low-stock ratios, recent orders, and the weekly
//! movement series. All aggregation happens on the server.

pub mod client;
pub mod types;

pub use types::{DashboardKpis, MovementSeries, OrderKind, OrderStatus, OrderSummary};

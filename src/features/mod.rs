//! Domain-level features (auth, products, dashboard, alerts). Bootstraps and
//! views import these modules so security and API handling stay out of
//! presentation code.

pub mod alerts;
pub mod auth;
pub mod dashboard;
pub mod products;

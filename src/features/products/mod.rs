//! Product catalog CRUD over the authenticated API client.

pub mod client;
pub mod types;

pub use types::{Product, ProductInput};

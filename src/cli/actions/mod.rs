pub mod alerts;
pub mod dashboard;
pub mod login;
pub mod products;

mod run;
mod runtime;

use crate::features::products::ProductInput;
use secrecy::SecretString;

pub use runtime::Runtime;

#[derive(Debug)]
pub enum Action {
    Login {
        username: String,
        password: SecretString,
    },
    Products(ProductsAction),
    Dashboard,
    Alerts,
}

#[derive(Debug)]
pub enum ProductsAction {
    List { search: Option<String> },
    Get { id: u64 },
    Create { input: ProductInput },
    Update { id: u64, input: ProductInput },
    Delete { id: u64 },
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self, globals: &crate::cli::globals::GlobalArgs) -> anyhow::Result<()> {
        run::execute(self, globals).await
    }
}

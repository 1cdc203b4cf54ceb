use crate::{
    cli::actions::{Runtime, runtime::explain},
    features::{alerts::client, products::Product},
};
use anyhow::Result;
use std::fmt::Write as _;

/// # Errors
/// Returns an error if no session was supplied or the API call fails.
pub async fn execute(runtime: &Runtime) -> Result<String> {
    runtime.require_session()?;
    let alerts = client::list(&runtime.api).await.map_err(explain)?;
    Ok(render(&alerts))
}

#[must_use]
pub fn render(alerts: &[Product]) -> String {
    let mut out = format!("{} alert(s)", alerts.len());
    for product in alerts {
        let _ = write!(
            out,
            "\n  {} {}: {} in stock, minimum {}",
            product.code, product.name, product.stock, product.minimum
        );
    }
    out
}

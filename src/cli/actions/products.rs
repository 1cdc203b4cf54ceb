use crate::{
    cli::actions::{ProductsAction, Runtime, runtime::explain},
    features::products::{Product, client},
};
use anyhow::Result;
use std::fmt::Write as _;
use tracing::info;

/// # Errors
/// Returns an error if no session was supplied or the API call fails.
pub async fn execute(runtime: &Runtime, action: ProductsAction) -> Result<String> {
    runtime.require_session()?;
    let api = &runtime.api;

    match action {
        ProductsAction::List { search } => {
            let products = client::list(api, search.as_deref()).await.map_err(explain)?;
            Ok(render_table(&products))
        }
        ProductsAction::Get { id } => {
            let product = client::get(api, id).await.map_err(explain)?;
            Ok(render_detail(&product))
        }
        ProductsAction::Create { input } => {
            let product = client::create(api, &input).await.map_err(explain)?;
            info!(id = product.id, "product created");
            Ok(render_detail(&product))
        }
        ProductsAction::Update { id, input } => {
            let product = client::update(api, id, &input).await.map_err(explain)?;
            info!(id, "product updated");
            Ok(render_detail(&product))
        }
        ProductsAction::Delete { id } => {
            client::delete(api, id).await.map_err(explain)?;
            info!(id, "product deleted");
            Ok(format!("Deleted product {id}"))
        }
    }
}

/// One line per product; low-stock rows are flagged.
#[must_use]
pub fn render_table(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found".to_string();
    }

    let mut out = format!(
        "{:>5}  {:<12}  {:<32}  {:>10}  {:>6}  {:>6}",
        "ID", "CODE", "NAME", "PRICE", "STOCK", "MIN"
    );
    for product in products {
        let _ = write!(
            out,
            "\n{:>5}  {:<12}  {:<32}  {:>10.2}  {:>6}  {:>6}{}",
            product.id,
            product.code,
            product.name,
            product.unit_price,
            product.stock,
            product.minimum,
            if product.is_low_stock() { "  LOW" } else { "" }
        );
    }
    out
}

#[must_use]
pub fn render_detail(product: &Product) -> String {
    let mut out = format!("#{} {} ({})", product.id, product.name, product.code);
    if let Some(description) = product.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = write!(out, "\n{description}");
    }
    let _ = write!(
        out,
        "\nPrice: {:.2}\nStock: {} (minimum {})",
        product.unit_price, product.stock, product.minimum
    );
    if product.is_low_stock() {
        let _ = write!(out, "\nBelow minimum by {}", product.shortfall());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, stock: i64, minimum: i64) -> Product {
        Product {
            id,
            name: "Relé auxiliar".to_string(),
            code: "REL-1".to_string(),
            description: None,
            unit_price: 9.9,
            stock,
            minimum,
        }
    }

    #[test]
    fn table_flags_low_stock() {
        let table = render_table(&[product(1, 10, 5), product(2, 5, 5)]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("CODE"));
        assert!(!lines[1].ends_with("LOW"));
        assert!(lines[2].ends_with("LOW"));
    }

    #[test]
    fn empty_table() {
        assert_eq!(render_table(&[]), "No products found");
    }

    #[test]
    fn detail_reports_shortfall() {
        let detail = render_detail(&product(2, 1, 4));
        assert!(detail.starts_with("#2 Relé auxiliar (REL-1)"));
        assert!(detail.contains("Price: 9.90"));
        assert!(detail.contains("Below minimum by 3"));

        assert!(!render_detail(&product(2, 9, 4)).contains("Below minimum"));
    }
}

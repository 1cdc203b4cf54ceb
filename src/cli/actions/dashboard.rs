use crate::{
    cli::actions::{Runtime, runtime::explain},
    features::dashboard::{DashboardKpis, client},
};
use anyhow::Result;
use std::fmt::Write as _;

/// # Errors
/// Returns an error if no session was supplied or the API call fails.
pub async fn execute(runtime: &Runtime) -> Result<String> {
    let identity = runtime.require_session()?;
    let kpis = client::kpis(&runtime.api).await.map_err(explain)?;
    Ok(render(&identity, &kpis))
}

#[must_use]
pub fn render(identity: &str, kpis: &DashboardKpis) -> String {
    let mut out = format!("Signed in as {identity}");
    let _ = write!(
        out,
        "\nProducts: {}\nBelow minimum: {} ({:.1}%)\nMissing units: {}",
        kpis.total_products,
        kpis.products_below_minimum,
        kpis.percent_below_minimum,
        kpis.missing_units
    );

    if !kpis.lowest_stock.is_empty() {
        out.push_str("\n\nLowest stock:");
        for product in &kpis.lowest_stock {
            let _ = write!(
                out,
                "\n  {} {} ({}/{})",
                product.code, product.name, product.stock, product.minimum
            );
        }
    }

    let movements: Vec<_> = kpis.movements.rows().collect();
    if !movements.is_empty() {
        out.push_str("\n\nMovements (in/out):");
        for (label, inbound, outbound) in movements {
            let _ = write!(out, "\n  {label}: {inbound}/{outbound}");
        }
    }

    if !kpis.recent_orders.is_empty() {
        out.push_str("\n\nRecent orders:");
        for order in &kpis.recent_orders {
            let _ = write!(
                out,
                "\n  #{} {} {} {}",
                order.id,
                order.kind.label(),
                order.date,
                order.status.label()
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::dashboard::MovementSeries;

    #[test]
    fn render_skips_empty_sections() {
        let kpis = DashboardKpis {
            total_products: 3,
            percent_below_minimum: 33.333,
            products_below_minimum: 1,
            missing_units: 4,
            lowest_stock: Vec::new(),
            recent_orders: Vec::new(),
            movements: MovementSeries::default(),
            alerts: Vec::new(),
        };

        let rendered = render("Admin", &kpis);
        assert!(rendered.starts_with("Signed in as Admin"));
        assert!(rendered.contains("Below minimum: 1 (33.3%)"));
        assert!(!rendered.contains("Lowest stock"));
        assert!(!rendered.contains("Movements"));
    }

    #[test]
    fn render_lists_movements() {
        let kpis = DashboardKpis {
            total_products: 1,
            percent_below_minimum: 0.0,
            products_below_minimum: 0,
            missing_units: 0,
            lowest_stock: Vec::new(),
            recent_orders: Vec::new(),
            movements: MovementSeries {
                labels: vec!["Seg".to_string(), "Ter".to_string()],
                inbound: vec![4, 2],
                outbound: vec![1, 3],
            },
            alerts: Vec::new(),
        };

        let rendered = render("Admin", &kpis);
        assert!(rendered.contains("Seg: 4/1"));
        assert!(rendered.contains("Ter: 2/3"));
    }
}

use crate::features::products::Product;
use serde::{Deserialize, Serialize};

/// Stock KPIs computed by the server for the dashboard.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DashboardKpis {
    #[serde(rename = "total_produtos")]
    pub total_products: u64,
    #[serde(rename = "perc_abaixo_minimo")]
    pub percent_below_minimum: f64,
    #[serde(rename = "produtos_abaixo_minimo")]
    pub products_below_minimum: u64,
    #[serde(rename = "pecas_em_falta")]
    pub missing_units: i64,
    #[serde(rename = "top_10_menor_estoque", default)]
    pub lowest_stock: Vec<Product>,
    #[serde(rename = "pedidos_recentes", default)]
    pub recent_orders: Vec<OrderSummary>,
    #[serde(rename = "entradas_saidas", default)]
    pub movements: MovementSeries,
    #[serde(rename = "alertas", default)]
    pub alerts: Vec<Product>,
}

/// Inbound/outbound unit counts per label, ready for a bar chart.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovementSeries {
    pub labels: Vec<String>,
    #[serde(rename = "entradas")]
    pub inbound: Vec<i64>,
    #[serde(rename = "saidas")]
    pub outbound: Vec<i64>,
}

impl MovementSeries {
    /// `(label, inbound, outbound)` rows; stops at the shortest series.
    pub fn rows(&self) -> impl Iterator<Item = (&str, i64, i64)> {
        self.labels
            .iter()
            .zip(&self.inbound)
            .zip(&self.outbound)
            .map(|((label, inbound), outbound)| (label.as_str(), *inbound, *outbound))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderSummary {
    pub id: u64,
    #[serde(rename = "tipo")]
    pub kind: OrderKind,
    #[serde(rename = "data")]
    pub date: String,
    #[serde(default = "OrderStatus::pending")]
    pub status: OrderStatus,
    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderKind {
    #[serde(rename = "compra")]
    Purchase,
    #[serde(rename = "venda")]
    Sale,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    #[serde(rename = "pendente")]
    Pending,
    #[serde(rename = "pronto")]
    Ready,
    #[serde(rename = "cancelado")]
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl OrderKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Purchase => "purchase",
            Self::Sale => "sale",
            Self::Unknown => "unknown",
        }
    }
}

impl OrderStatus {
    const fn pending() -> Self {
        Self::Pending
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Ready => "ready",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kpis_deserialize_server_payload() {
        let kpis: DashboardKpis = serde_json::from_str(
            r#"{
                "perc_abaixo_minimo": 33.3,
                "pecas_em_falta": 4,
                "total_produtos": 3,
                "produtos_abaixo_minimo": 1,
                "top_10_menor_estoque": [
                    {"id": 2, "nome": "Relé", "codigo": "REL-1", "valor_unitario": 9.9,
                     "quantidade_estoque": 1, "minimo_alerta": 5, "descricao": ""}
                ],
                "pedidos_recentes": [
                    {"id": 8, "tipo": "venda", "data": "2024-05-02T10:00:00",
                     "status": "pronto", "itens": [], "observacoes": ""},
                    {"id": 9, "tipo": "troca", "data": "2024-05-03T10:00:00",
                     "status": "arquivado"}
                ],
                "entradas_saidas": {
                    "labels": ["Segunda", "Terça"],
                    "entradas": [5, 3],
                    "saidas": [3, 5]
                },
                "alertas": []
            }"#,
        )
        .expect("Failed to deserialize");

        assert_eq!(kpis.total_products, 3);
        assert_eq!(kpis.missing_units, 4);
        assert_eq!(kpis.lowest_stock.len(), 1);
        assert_eq!(kpis.recent_orders[0].kind, OrderKind::Sale);
        assert_eq!(kpis.recent_orders[0].status, OrderStatus::Ready);
        assert_eq!(kpis.recent_orders[1].kind, OrderKind::Unknown);
        assert_eq!(kpis.recent_orders[1].status, OrderStatus::Unknown);
        assert_eq!(
            kpis.movements.rows().collect::<Vec<_>>(),
            vec![("Segunda", 5, 3), ("Terça", 3, 5)]
        );
    }

    #[test]
    fn order_status_defaults_to_pending() {
        let order: OrderSummary =
            serde_json::from_str(r#"{"id": 1, "tipo": "compra", "data": "2024-05-01"}"#)
                .expect("Failed to deserialize");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.kind, OrderKind::Purchase);
        assert_eq!(order.notes, None);
    }
}

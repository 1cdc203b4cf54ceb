//! Product payloads. Field names on the wire follow the server (`nome`,
//! `codigo`, ...); Rust names are English.

use crate::app_lib::ApiError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "descricao", default)]
    pub description: Option<String>,
    #[serde(rename = "valor_unitario")]
    pub unit_price: f64,
    #[serde(rename = "quantidade_estoque")]
    pub stock: i64,
    #[serde(rename = "minimo_alerta")]
    pub minimum: i64,
}

impl Product {
    /// Stock at or below the alert minimum.
    #[must_use]
    pub const fn is_low_stock(&self) -> bool {
        self.stock <= self.minimum
    }

    /// Units missing to reach the minimum; zero when stocked.
    #[must_use]
    pub const fn shortfall(&self) -> i64 {
        if self.minimum > self.stock {
            self.minimum - self.stock
        } else {
            0
        }
    }
}

/// Body for create and update.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductInput {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "valor_unitario")]
    pub unit_price: f64,
    #[serde(rename = "quantidade_estoque")]
    pub stock: i64,
    #[serde(rename = "minimo_alerta")]
    pub minimum: i64,
}

impl ProductInput {
    /// Mirrors the server's field constraints so bad input never leaves the client.
    ///
    /// # Errors
    /// Returns `ApiError::Config` naming the first invalid field.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::Config("Product name is required.".to_string()));
        }
        if self.code.trim().is_empty() {
            return Err(ApiError::Config("Product code is required.".to_string()));
        }
        if !self.unit_price.is_finite() || self.unit_price <= 0.0 {
            return Err(ApiError::Config(
                "Unit price must be greater than zero.".to_string(),
            ));
        }
        if self.stock < 0 {
            return Err(ApiError::Config("Stock cannot be negative.".to_string()));
        }
        if self.minimum < 0 {
            return Err(ApiError::Config(
                "Alert minimum cannot be negative.".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            code: product.code.clone(),
            description: product.description.clone().unwrap_or_default(),
            unit_price: product.unit_price,
            stock: product.stock,
            minimum: product.minimum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relay() -> ProductInput {
        ProductInput {
            name: "Relé auxiliar 12V".to_string(),
            code: "REL-012".to_string(),
            description: String::new(),
            unit_price: 18.5,
            stock: 4,
            minimum: 5,
        }
    }

    #[test]
    fn product_deserializes_server_fields() {
        let product: Product = serde_json::from_str(
            r#"{"id": 3, "nome": "Alternador", "codigo": "ALT-90", "valor_unitario": 450.0,
                "quantidade_estoque": 2, "minimo_alerta": 3, "descricao": null}"#,
        )
        .expect("Failed to deserialize");

        assert_eq!(product.id, 3);
        assert_eq!(product.name, "Alternador");
        assert_eq!(product.description, None);
        assert!(product.is_low_stock());
        assert_eq!(product.shortfall(), 1);
    }

    #[test]
    fn stock_equal_to_minimum_is_low() {
        let mut product = Product {
            id: 1,
            name: "Fusível".to_string(),
            code: "FUS-10".to_string(),
            description: Some("10A".to_string()),
            unit_price: 1.2,
            stock: 10,
            minimum: 10,
        };
        assert!(product.is_low_stock());
        assert_eq!(product.shortfall(), 0);

        product.stock = 11;
        assert!(!product.is_low_stock());
    }

    #[test]
    fn input_serializes_with_server_names() {
        let json = serde_json::to_value(relay()).expect("Failed to serialize");
        assert_eq!(json["nome"], "Relé auxiliar 12V");
        assert_eq!(json["codigo"], "REL-012");
        assert_eq!(json["quantidade_estoque"], 4);
        assert_eq!(json["minimo_alerta"], 5);
        assert_eq!(json["descricao"], "");
    }

    #[test]
    fn validate_rejects_bad_fields() {
        assert!(relay().validate().is_ok());

        let cases = [
            ProductInput {
                name: " ".to_string(),
                ..relay()
            },
            ProductInput {
                code: String::new(),
                ..relay()
            },
            ProductInput {
                unit_price: 0.0,
                ..relay()
            },
            ProductInput {
                unit_price: f64::NAN,
                ..relay()
            },
            ProductInput {
                stock: -1,
                ..relay()
            },
            ProductInput {
                minimum: -2,
                ..relay()
            },
        ];
        for input in cases {
            assert!(matches!(input.validate(), Err(ApiError::Config(_))));
        }
    }
}

//! Client helpers for the product catalog. Inputs are validated before any
//! request is sent; the backend still enforces every rule.

use crate::{
    app_lib::{ApiClient, ApiError, Transport},
    features::products::types::{Product, ProductInput},
};
use url::form_urlencoded::byte_serialize;

const PRODUCTS_PATH: &str = "/api/produtos";

/// Lists products, optionally filtered by a name/code search term.
///
/// # Errors
/// Any `ApiClient` failure.
pub async fn list<T: Transport>(
    api: &ApiClient<T>,
    search: Option<&str>,
) -> Result<Vec<Product>, ApiError> {
    api.get_data_or_default(&list_path(search)).await
}

/// # Errors
/// `Http` 404 when the product does not exist, plus any `ApiClient` failure.
pub async fn get<T: Transport>(api: &ApiClient<T>, id: u64) -> Result<Product, ApiError> {
    api.get_data(&item_path(id)).await
}

/// # Errors
/// `Config` for invalid input, plus any `ApiClient` failure.
pub async fn create<T: Transport>(
    api: &ApiClient<T>,
    input: &ProductInput,
) -> Result<Product, ApiError> {
    input.validate()?;
    api.post_data(PRODUCTS_PATH, input).await
}

/// # Errors
/// `Config` for invalid input, `Http` 404 for an unknown id, plus any `ApiClient` failure.
pub async fn update<T: Transport>(
    api: &ApiClient<T>,
    id: u64,
    input: &ProductInput,
) -> Result<Product, ApiError> {
    input.validate()?;
    api.put_data(&item_path(id), input).await
}

/// # Errors
/// `Http` 404 for an unknown id, plus any `ApiClient` failure.
pub async fn delete<T: Transport>(api: &ApiClient<T>, id: u64) -> Result<(), ApiError> {
    api.delete(&item_path(id)).await.map(|_| ())
}

fn list_path(search: Option<&str>) -> String {
    match search.map(str::trim).filter(|term| !term.is_empty()) {
        Some(term) => {
            let encoded: String = byte_serialize(term.as_bytes()).collect();
            format!("{PRODUCTS_PATH}?busca={encoded}")
        }
        None => PRODUCTS_PATH.to_string(),
    }
}

fn item_path(id: u64) -> String {
    format!("{PRODUCTS_PATH}/{id}")
}

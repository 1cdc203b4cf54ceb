use crate::{
    app_lib::{ApiClient, ApiError, Transport},
    features::products::Product,
};

const ALERTS_PATH: &str = "/api/notificacoes";

/// Products at or below their alert minimum. A missing `data` field is an empty list.
///
/// # Errors
/// Any `ApiClient` failure.
pub async fn list<T: Transport>(api: &ApiClient<T>) -> Result<Vec<Product>, ApiError> {
    api.get_data_or_default(ALERTS_PATH).await
}

/// Number of active alerts, for the badge.
///
/// # Errors
/// Any `ApiClient` failure.
pub async fn count<T: Transport>(api: &ApiClient<T>) -> Result<usize, ApiError> {
    list(api).await.map(|alerts| alerts.len())
}

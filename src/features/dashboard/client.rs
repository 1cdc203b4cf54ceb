use crate::{
    app_lib::{ApiClient, ApiError, Transport},
    features::dashboard::types::DashboardKpis,
};

const KPIS_PATH: &str = "/api/dashboard/kpis";

/// Fetches the dashboard KPIs.
///
/// # Errors
/// Any `ApiClient` failure.
pub async fn kpis<T: Transport>(api: &ApiClient<T>) -> Result<DashboardKpis, ApiError> {
    api.get_data(KPIS_PATH).await
}

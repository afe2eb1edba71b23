use common::endpoints;
use common::{Alert, ApiResult};

use super::ApiClient;

/// Get alerts triggered within the last `days` days
pub async fn get_alerts(client: &ApiClient, days: u32) -> ApiResult<Vec<Alert>> {
    log::trace!("Fetching alerts for the last {} days", days);
    let result: ApiResult<Vec<Alert>> = client.get(&endpoints::alerts_since(days)).await;
    match &result {
        Ok(alerts) => log::info!("Fetched {} alerts", alerts.len()),
        Err(e) => log::error!("Failed to fetch alerts: {}", e),
    }
    result
}

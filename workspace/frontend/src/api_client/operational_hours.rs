use common::endpoints;
use common::{ApiResult, MessageResponse, NewOperationalHoursEntry, OperationalHoursEntry};

use super::ApiClient;

/// Get the operational hours log
pub async fn get_operational_hours(client: &ApiClient) -> ApiResult<Vec<OperationalHoursEntry>> {
    log::trace!("Fetching operational hours");
    let result: ApiResult<Vec<OperationalHoursEntry>> = client.get(endpoints::OPERATIONAL_HOURS).await;
    match &result {
        Ok(entries) => log::info!("Fetched {} operational hours entries", entries.len()),
        Err(e) => log::error!("Failed to fetch operational hours: {}", e),
    }
    result
}

/// Log running hours for one piece of equipment
pub async fn log_operational_hours(
    client: &ApiClient,
    entry: &NewOperationalHoursEntry,
) -> ApiResult<MessageResponse> {
    log::debug!(
        "Logging {} hours for equipment {} on {}",
        entry.running_hours,
        entry.equipment_id,
        entry.log_date
    );
    let result: ApiResult<MessageResponse> = client.post(endpoints::OPERATIONAL_HOURS, entry).await;
    match &result {
        Ok(response) => log::info!("Operational hours logged: {}", response.message),
        Err(e) => log::error!("Failed to log operational hours: {}", e),
    }
    result
}

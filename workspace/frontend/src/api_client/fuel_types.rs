use common::endpoints;
use common::{ApiResult, FuelType};

use super::ApiClient;

/// Get all fuel types
pub async fn get_fuel_types(client: &ApiClient) -> ApiResult<Vec<FuelType>> {
    log::trace!("Fetching fuel types");
    let result: ApiResult<Vec<FuelType>> = client.get(endpoints::FUEL_TYPES).await;
    match &result {
        Ok(fuel_types) => log::info!("Fetched {} fuel types", fuel_types.len()),
        Err(e) => log::error!("Failed to fetch fuel types: {}", e),
    }
    result
}

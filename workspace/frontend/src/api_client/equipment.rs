use common::endpoints;
use common::{ApiResult, Equipment};

use super::ApiClient;

/// Get equipment, optionally restricted to one site
pub async fn get_equipment(client: &ApiClient, site_id: Option<i32>) -> ApiResult<Vec<Equipment>> {
    log::trace!("Fetching equipment for site {:?}", site_id);
    let result: ApiResult<Vec<Equipment>> = client.get(&endpoints::equipment_for_site(site_id)).await;
    match &result {
        Ok(items) => log::info!("Fetched {} equipment items", items.len()),
        Err(e) => log::error!("Failed to fetch equipment: {}", e),
    }
    result
}

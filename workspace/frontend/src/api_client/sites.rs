use common::endpoints;
use common::{ApiResult, Site};

use super::ApiClient;

/// Get all sites
pub async fn get_sites(client: &ApiClient) -> ApiResult<Vec<Site>> {
    log::trace!("Fetching all sites");
    let result: ApiResult<Vec<Site>> = client.get(endpoints::SITES).await;
    match &result {
        Ok(sites) => log::info!("Fetched {} sites", sites.len()),
        Err(e) => log::error!("Failed to fetch sites: {}", e),
    }
    result
}

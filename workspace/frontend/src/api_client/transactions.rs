use common::endpoints;
use common::{ApiResult, RefillTransaction, UsageTransaction};

use super::ApiClient;

/// Get refill transactions
pub async fn get_refills(client: &ApiClient) -> ApiResult<Vec<RefillTransaction>> {
    log::trace!("Fetching refill transactions");
    let result: ApiResult<Vec<RefillTransaction>> = client.get(endpoints::REFILLS).await;
    match &result {
        Ok(refills) => log::info!("Fetched {} refill transactions", refills.len()),
        Err(e) => log::error!("Failed to fetch refill transactions: {}", e),
    }
    result
}

/// Get usage transactions
pub async fn get_usage(client: &ApiClient) -> ApiResult<Vec<UsageTransaction>> {
    log::trace!("Fetching usage transactions");
    let result: ApiResult<Vec<UsageTransaction>> = client.get(endpoints::USAGE).await;
    match &result {
        Ok(usage) => log::info!("Fetched {} usage transactions", usage.len()),
        Err(e) => log::error!("Failed to fetch usage transactions: {}", e),
    }
    result
}

use common::endpoints;
use common::{ApiResult, StockRecord};

use super::ApiClient;

/// Get current stock levels for every site and fuel type
pub async fn get_stock(client: &ApiClient) -> ApiResult<Vec<StockRecord>> {
    log::trace!("Fetching stock levels");
    let result: ApiResult<Vec<StockRecord>> = client.get(endpoints::STOCK).await;
    match &result {
        Ok(records) => log::info!("Fetched {} stock records", records.len()),
        Err(e) => log::error!("Failed to fetch stock levels: {}", e),
    }
    result
}

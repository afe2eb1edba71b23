use common::endpoints;
use common::{
    ApiResult, CalculateForecastsRequest, ForecastQuery, ForecastRecord, ForecastScenario,
    MessageResponse,
};

use super::ApiClient;

/// Get forecasts matching the given filters
pub async fn get_forecasts(client: &ApiClient, query: ForecastQuery) -> ApiResult<Vec<ForecastRecord>> {
    log::trace!("Fetching forecasts with {:?}", query);
    let result: ApiResult<Vec<ForecastRecord>> = client.get(&query.to_endpoint()).await;
    match &result {
        Ok(forecasts) => log::info!("Fetched {} forecasts", forecasts.len()),
        Err(e) => log::error!("Failed to fetch forecasts: {}", e),
    }
    result
}

/// Get the what-if scenarios of one forecast
pub async fn get_scenarios(client: &ApiClient, forecast_id: i32) -> ApiResult<Vec<ForecastScenario>> {
    log::trace!("Fetching scenarios for forecast {}", forecast_id);
    let result: ApiResult<Vec<ForecastScenario>> =
        client.get(&endpoints::forecast_scenarios(forecast_id)).await;
    match &result {
        Ok(scenarios) => log::info!("Fetched {} scenarios for forecast {}", scenarios.len(), forecast_id),
        Err(e) => log::error!("Failed to fetch scenarios for forecast {}: {}", forecast_id, e),
    }
    result
}

/// Ask the backend to recalculate forecasts
pub async fn calculate_forecasts(
    client: &ApiClient,
    request: &CalculateForecastsRequest,
) -> ApiResult<MessageResponse> {
    log::debug!("Requesting forecast calculation: {:?}", request);
    let result: ApiResult<MessageResponse> = client.post(endpoints::CALCULATE_FORECASTS, request).await;
    match &result {
        Ok(response) => log::info!("Forecast calculation finished: {}", response.message),
        Err(e) => log::error!("Failed to calculate forecasts: {}", e),
    }
    result
}

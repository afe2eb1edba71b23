//! Endpoint paths of the fuel-control REST API.
//!
//! Paths are relative to the configured API base URL; `join_url` glues the two.

use chrono::NaiveDate;

pub const SITES: &str = "/sites";
pub const FUEL_TYPES: &str = "/fuel-types";
pub const EQUIPMENT: &str = "/equipment";
pub const STOCK: &str = "/stock";
pub const FORECASTS: &str = "/forecasts";
pub const CALCULATE_FORECASTS: &str = "/forecasts/calculate";
pub const OPERATIONAL_HOURS: &str = "/operational-hours";
pub const REFILLS: &str = "/refills";
pub const USAGE: &str = "/usage";
pub const ALERTS: &str = "/alerts";

/// Concatenates the base URL and an endpoint path.
pub fn join_url(base: &str, endpoint: &str) -> String {
    format!("{}{}", base, endpoint)
}

pub fn equipment_for_site(site_id: Option<i32>) -> String {
    match site_id {
        Some(id) => format!("{}?site_id={}", EQUIPMENT, id),
        None => EQUIPMENT.to_string(),
    }
}

pub fn alerts_since(days: u32) -> String {
    format!("{}?days={}", ALERTS, days)
}

pub fn forecast_scenarios(forecast_id: i32) -> String {
    format!("{}/{}/scenarios", FORECASTS, forecast_id)
}

/// Filters for the forecasts listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForecastQuery {
    pub site_id: Option<i32>,
    pub forecast_date: Option<NaiveDate>,
}

impl ForecastQuery {
    pub fn to_endpoint(&self) -> String {
        let mut params = Vec::new();
        if let Some(site_id) = self.site_id {
            params.push(format!("site_id={}", site_id));
        }
        if let Some(date) = self.forecast_date {
            params.push(format!("forecast_date={}", date.format("%Y-%m-%d")));
        }

        if params.is_empty() {
            FORECASTS.to_string()
        } else {
            format!("{}?{}", FORECASTS, params.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_query_without_filters() {
        assert_eq!(ForecastQuery::default().to_endpoint(), "/forecasts");
    }

    #[test]
    fn test_forecast_query_with_filters() {
        let query = ForecastQuery {
            site_id: Some(4),
            forecast_date: NaiveDate::from_ymd_opt(2024, 3, 9),
        };
        assert_eq!(query.to_endpoint(), "/forecasts?site_id=4&forecast_date=2024-03-09");

        let date_only = ForecastQuery {
            site_id: None,
            forecast_date: NaiveDate::from_ymd_opt(2024, 12, 31),
        };
        assert_eq!(date_only.to_endpoint(), "/forecasts?forecast_date=2024-12-31");
    }

    #[test]
    fn test_path_builders() {
        assert_eq!(equipment_for_site(Some(2)), "/equipment?site_id=2");
        assert_eq!(equipment_for_site(None), "/equipment");
        assert_eq!(alerts_since(1), "/alerts?days=1");
        assert_eq!(forecast_scenarios(17), "/forecasts/17/scenarios");
        assert_eq!(
            join_url("http://localhost:5000/api", STOCK),
            "http://localhost:5000/api/stock"
        );
    }
}

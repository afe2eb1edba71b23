//! Summary figures shown on the dashboard.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::format::format_number;
use crate::models::{Alert, Equipment, ForecastRecord, Site, StockRecord};
use crate::status::FillLevel;

/// Look-back window, in days, for the alerts counted on the dashboard.
pub const ALERT_WINDOW_DAYS: u32 = 1;
/// Forecasts with at most this many days remaining are listed as recent.
pub const RECENT_FORECAST_MAX_DAYS: i64 = 7;
pub const RECENT_FORECAST_LIMIT: usize = 5;
pub const CHART_RECORD_LIMIT: usize = 10;

const CRITICAL_SEVERITY: &str = "Critical";

/// Key figures at the top of the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardKpis {
    pub site_count: usize,
    pub equipment_count: usize,
    pub total_stock: Decimal,
    pub critical_alerts: usize,
    pub alert_count: usize,
}

impl DashboardKpis {
    pub fn compute(
        sites: &[Site],
        equipment: &[Equipment],
        stock: &[StockRecord],
        alerts: &[Alert],
    ) -> Self {
        Self {
            site_count: sites.len(),
            equipment_count: equipment.len(),
            total_stock: total_stock(stock),
            critical_alerts: critical_alert_count(alerts),
            alert_count: alerts.len(),
        }
    }

    pub fn total_stock_label(&self) -> String {
        format!("{}L", format_number(Some(self.total_stock), 0))
    }
}

/// Sum of every record's current quantity; missing quantities count as zero.
pub fn total_stock(stock: &[StockRecord]) -> Decimal {
    stock
        .iter()
        .map(|record| record.current_quantity.unwrap_or(Decimal::ZERO))
        .sum()
}

/// Number of alerts whose severity is exactly `"Critical"`.
pub fn critical_alert_count(alerts: &[Alert]) -> usize {
    alerts
        .iter()
        .filter(|alert| alert.severity_level.as_deref() == Some(CRITICAL_SEVERITY))
        .count()
}

/// Forecasts running out within a week, soonest first, at most five.
///
/// Forecasts without a days-remaining figure are skipped.
pub fn recent_forecasts(forecasts: &[ForecastRecord]) -> Vec<&ForecastRecord> {
    let threshold = Decimal::from(RECENT_FORECAST_MAX_DAYS);
    let mut recent: Vec<&ForecastRecord> = forecasts
        .iter()
        .filter(|forecast| {
            forecast
                .forecast_days_remaining
                .is_some_and(|days| days <= threshold)
        })
        .collect();

    recent.sort_by_key(|forecast| forecast.forecast_days_remaining);
    recent.truncate(RECENT_FORECAST_LIMIT);
    recent
}

/// Series for the stock-level bar chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockChartData {
    pub labels: Vec<String>,
    pub percentages: Vec<f64>,
    pub colors: Vec<&'static str>,
}

impl StockChartData {
    /// Uses the first ten stock records; a missing fill percentage plots as 0.
    pub fn from_stock(stock: &[StockRecord]) -> Self {
        let mut data = Self::default();
        for record in stock.iter().take(CHART_RECORD_LIMIT) {
            let percentage = record.fill_percentage.unwrap_or(Decimal::ZERO);
            data.labels.push(record.site_name.clone());
            data.percentages.push(percentage.to_f64().unwrap_or(0.0));
            data.colors.push(FillLevel::from_percentage(percentage).color());
        }
        data
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::palette;

    fn stock(site: &str, quantity: Option<i64>, fill: Option<i64>) -> StockRecord {
        StockRecord {
            site_name: site.to_string(),
            fuel_name: "Diesel".to_string(),
            current_quantity: quantity.map(Decimal::from),
            fill_percentage: fill.map(Decimal::from),
            ..Default::default()
        }
    }

    fn alert(severity: Option<&str>) -> Alert {
        Alert {
            severity_level: severity.map(str::to_string),
            ..Default::default()
        }
    }

    fn forecast(id: i32, days: Option<i64>) -> ForecastRecord {
        ForecastRecord {
            forecast_id: id,
            forecast_days_remaining: days.map(Decimal::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_total_stock_treats_missing_as_zero() {
        let records = vec![
            stock("A", Some(1200), None),
            stock("B", None, None),
            stock("C", Some(300), None),
        ];
        assert_eq!(total_stock(&records), Decimal::from(1500));
        assert_eq!(total_stock(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_critical_alert_count_is_case_sensitive() {
        let alerts = vec![
            alert(Some("Critical")),
            alert(Some("critical")),
            alert(Some("CRITICAL")),
            alert(Some("Low")),
            alert(None),
            alert(Some("Critical")),
        ];
        assert_eq!(critical_alert_count(&alerts), 2);
    }

    #[test]
    fn test_kpis_compute() {
        let records = vec![stock("A", Some(1234567), Some(50))];
        let alerts = vec![alert(Some("Critical")), alert(Some("Low"))];
        let kpis = DashboardKpis::compute(&[], &[], &records, &alerts);

        assert_eq!(kpis.site_count, 0);
        assert_eq!(kpis.critical_alerts, 1);
        assert_eq!(kpis.alert_count, 2);
        assert_eq!(kpis.total_stock_label(), "1,234,567L");
    }

    #[test]
    fn test_recent_forecasts_filter_sort_truncate() {
        let forecasts = vec![
            forecast(1, Some(9)),
            forecast(2, Some(7)),
            forecast(3, Some(1)),
            forecast(4, None),
            forecast(5, Some(5)),
            forecast(6, Some(0)),
            forecast(7, Some(3)),
            forecast(8, Some(6)),
            forecast(9, Some(30)),
        ];

        let ids: Vec<i32> = recent_forecasts(&forecasts)
            .iter()
            .map(|f| f.forecast_id)
            .collect();
        assert_eq!(ids, vec![6, 3, 7, 5, 8]);
    }

    #[test]
    fn test_recent_forecasts_empty_when_none_qualify() {
        let forecasts = vec![forecast(1, Some(8)), forecast(2, None)];
        assert!(recent_forecasts(&forecasts).is_empty());
    }

    #[test]
    fn test_chart_data_uses_first_ten_records() {
        let records: Vec<StockRecord> = (0..12)
            .map(|i| stock(&format!("Site {}", i), Some(100), Some(i * 8)))
            .collect();

        let data = StockChartData::from_stock(&records);
        assert_eq!(data.labels.len(), 10);
        assert_eq!(data.labels[9], "Site 9");
        assert_eq!(data.percentages[2], 16.0);
        assert_eq!(data.colors[2], palette::CRITICAL);
        assert_eq!(data.colors[3], palette::WARNING);
        assert_eq!(data.colors[5], palette::SUCCESS);
    }

    #[test]
    fn test_chart_data_missing_percentage_is_zero() {
        let data = StockChartData::from_stock(&[stock("Depot", None, None)]);
        assert_eq!(data.percentages, vec![0.0]);
        assert_eq!(data.colors, vec![palette::CRITICAL]);
    }
}

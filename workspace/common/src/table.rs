//! Row projections for every data table.
//!
//! A table body is rebuilt from scratch on each render. An empty result set
//! never produces an empty body: it yields the table's placeholder instead.

use rust_decimal::Decimal;

use crate::format::{
    NOT_AVAILABLE, SYSTEM_USER, format_date, format_datetime, format_number,
    format_optional_number, status_class, text_or,
};
use crate::models::{
    Equipment, ForecastRecord, FuelType, ForecastScenario, OperationalHoursEntry, RefillTransaction,
    StockRecord, UsageTransaction,
};
use crate::status::{FillLevel, active_badge, days_remaining_class};

pub const NO_FORECASTS: &str = "No forecasts available";
pub const NO_CRITICAL_FORECASTS: &str = "No critical forecasts";
pub const NO_SCENARIOS: &str = "No scenarios for this forecast";
pub const NO_STOCK: &str = "No stock data available";
pub const NO_EQUIPMENT: &str = "No equipment data available";
pub const NO_OPERATIONAL_HOURS: &str = "No operational hours data available";
pub const NO_REFILLS: &str = "No refill transactions found";
pub const NO_USAGE: &str = "No usage transactions found";

/// Either the rendered rows or the placeholder shown in their place.
#[derive(Debug, Clone, PartialEq)]
pub enum TableContent<R> {
    Placeholder(&'static str),
    Rows(Vec<R>),
}

impl<R> TableContent<R> {
    pub fn build<T>(records: &[T], placeholder: &'static str, project: impl Fn(&T) -> R) -> Self {
        if records.is_empty() {
            TableContent::Placeholder(placeholder)
        } else {
            TableContent::Rows(records.iter().map(project).collect())
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            TableContent::Placeholder(_) => 0,
            TableContent::Rows(rows) => rows.len(),
        }
    }
}

/// A text label rendered inside a coloured status pill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub class: &'static str,
}

/// Horizontal fill bar: width in percent plus the tier colour.
#[derive(Debug, Clone, PartialEq)]
pub struct FillBar {
    pub width: String,
    pub color: &'static str,
    pub label: String,
}

impl FillBar {
    pub fn from_percentage(percentage: Option<Decimal>) -> Self {
        let value = percentage.unwrap_or(Decimal::ZERO);
        let clamped = value.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
        Self {
            width: format!("{}%", clamped.normalize()),
            color: FillLevel::from_percentage(value).color(),
            label: format!("{}%", format_number(percentage, 1)),
        }
    }
}

// ===================== Forecasts =====================

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRow {
    pub forecast_id: i32,
    pub site: String,
    pub fuel: String,
    pub balance: String,
    pub daily_rate: String,
    pub days_remaining: Badge,
    pub next_refill: String,
    pub confidence: String,
}

impl From<&ForecastRecord> for ForecastRow {
    fn from(forecast: &ForecastRecord) -> Self {
        let days_label = match forecast.forecast_days_remaining {
            Some(days) => format!("{} days", days.normalize()),
            None => NOT_AVAILABLE.to_string(),
        };

        Self {
            forecast_id: forecast.forecast_id,
            site: forecast.site_name.clone(),
            fuel: forecast.fuel_name.clone(),
            balance: format!("{}L", format_number(forecast.current_balance, 0)),
            daily_rate: format!("{}L/day", format_number(forecast.daily_consumption_rate, 1)),
            days_remaining: Badge {
                label: days_label,
                class: days_remaining_class(forecast.forecast_days_remaining),
            },
            next_refill: format_date(forecast.next_refill_date_estimate.as_deref()),
            confidence: format!("{}%", format_number(forecast.confidence_level, 0)),
        }
    }
}

/// Entry in the dashboard's "running out soon" list.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentForecastItem {
    pub heading: String,
    pub days_remaining: String,
    pub next_refill: String,
}

impl From<&ForecastRecord> for RecentForecastItem {
    fn from(forecast: &ForecastRecord) -> Self {
        Self {
            heading: format!("{} - {}", forecast.site_name, forecast.fuel_name),
            days_remaining: forecast
                .forecast_days_remaining
                .map(|days| days.normalize().to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            next_refill: format_date(forecast.next_refill_date_estimate.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRow {
    pub name: String,
    pub consumption_rate: String,
    pub safety_factor: String,
    pub days_remaining: String,
    pub created: String,
}

impl From<&ForecastScenario> for ScenarioRow {
    fn from(scenario: &ForecastScenario) -> Self {
        Self {
            name: scenario.scenario_name.clone(),
            consumption_rate: format_optional_number(scenario.adjusted_consumption_rate, 1, "L/day"),
            safety_factor: format_optional_number(scenario.adjusted_safety_factor, 2, ""),
            days_remaining: format_optional_number(scenario.adjusted_days_remaining, 1, " days"),
            created: format_datetime(scenario.created_date.as_deref()),
        }
    }
}

// ===================== Stock & equipment =====================

#[derive(Debug, Clone, PartialEq)]
pub struct StockRow {
    pub site: String,
    pub fuel: String,
    pub quantity: String,
    pub available: String,
    pub fill: FillBar,
    pub status: Badge,
    pub last_updated: String,
}

impl From<&StockRecord> for StockRow {
    fn from(record: &StockRecord) -> Self {
        Self {
            site: record.site_name.clone(),
            fuel: record.fuel_name.clone(),
            quantity: format!("{}L", format_number(record.current_quantity, 0)),
            available: format!("{}L", format_number(record.available_quantity, 0)),
            fill: FillBar::from_percentage(record.fill_percentage),
            status: Badge {
                label: record.stock_status.clone().unwrap_or_default(),
                class: status_class(record.stock_status.as_deref()),
            },
            last_updated: format_datetime(record.last_updated.as_deref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentRow {
    pub equipment_id: i32,
    pub name: String,
    pub site: String,
    pub equipment_type: String,
    pub fuel: String,
    pub consumption_rate: String,
    pub manufacturer: String,
    pub model: String,
    pub status: Badge,
}

impl From<&Equipment> for EquipmentRow {
    fn from(item: &Equipment) -> Self {
        let (label, class) = active_badge(item.is_active);
        Self {
            equipment_id: item.equipment_id,
            name: item.equipment_name.clone(),
            site: item.site_name.clone(),
            equipment_type: text_or(item.equipment_type.as_deref(), NOT_AVAILABLE).to_string(),
            fuel: item.fuel_name.clone(),
            consumption_rate: format_number(item.consumption_rate, 1),
            manufacturer: text_or(item.manufacturer.as_deref(), NOT_AVAILABLE).to_string(),
            model: text_or(item.model.as_deref(), NOT_AVAILABLE).to_string(),
            status: Badge {
                label: label.to_string(),
                class,
            },
        }
    }
}

// ===================== Logs & transactions =====================

#[derive(Debug, Clone, PartialEq)]
pub struct OperationalHoursRow {
    pub date: String,
    pub site: String,
    pub equipment: String,
    pub running_hours: String,
    pub fuel_consumed: String,
    pub recorded_by: String,
    pub notes: String,
}

impl From<&OperationalHoursEntry> for OperationalHoursRow {
    fn from(entry: &OperationalHoursEntry) -> Self {
        Self {
            date: format_date(entry.log_date.as_deref()),
            site: entry.site_name.clone(),
            equipment: entry.equipment_name.clone(),
            running_hours: format_number(entry.running_hours, 1),
            fuel_consumed: format_optional_number(entry.fuel_consumed, 1, "L"),
            recorded_by: text_or(entry.recorded_by.as_deref(), NOT_AVAILABLE).to_string(),
            notes: text_or(entry.notes.as_deref(), NOT_AVAILABLE).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefillRow {
    pub transaction_id: String,
    pub date: String,
    pub site: String,
    pub fuel: String,
    pub quantity: String,
    pub supplier: String,
    pub unit_cost: String,
    pub total_cost: String,
    pub created_by: String,
}

impl From<&RefillTransaction> for RefillRow {
    fn from(refill: &RefillTransaction) -> Self {
        Self {
            transaction_id: refill.transaction_id.clone(),
            date: format_date(refill.refill_date.as_deref()),
            site: refill.site_name.clone(),
            fuel: refill.fuel_name.clone(),
            quantity: format!("{}L", format_number(refill.quantity, 0)),
            supplier: text_or(refill.supplier_name.as_deref(), NOT_AVAILABLE).to_string(),
            unit_cost: format_optional_number(refill.unit_cost, 2, ""),
            total_cost: format_optional_number(refill.total_cost, 0, ""),
            created_by: text_or(refill.created_by.as_deref(), SYSTEM_USER).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UsageRow {
    pub transaction_id: String,
    pub date: String,
    pub site: String,
    pub fuel: String,
    pub equipment: String,
    pub quantity: String,
    pub purpose: String,
    pub operator: String,
    pub created_by: String,
}

impl From<&UsageTransaction> for UsageRow {
    fn from(usage: &UsageTransaction) -> Self {
        Self {
            transaction_id: usage.transaction_id.clone(),
            date: format_date(usage.usage_date.as_deref()),
            site: usage.site_name.clone(),
            fuel: usage.fuel_name.clone(),
            equipment: text_or(usage.equipment_name.as_deref(), NOT_AVAILABLE).to_string(),
            quantity: format!("{}L", format_number(usage.quantity, 0)),
            purpose: text_or(usage.purpose.as_deref(), NOT_AVAILABLE).to_string(),
            operator: text_or(usage.operator_name.as_deref(), NOT_AVAILABLE).to_string(),
            created_by: text_or(usage.created_by.as_deref(), SYSTEM_USER).to_string(),
        }
    }
}

/// Fills in fuel names the equipment listing left blank, looked up by fuel type.
pub fn backfill_fuel_names(equipment: &mut [Equipment], fuel_types: &[FuelType]) {
    for item in equipment.iter_mut().filter(|item| item.fuel_name.trim().is_empty()) {
        let fuel = item
            .fuel_type_id
            .and_then(|id| fuel_types.iter().find(|fuel| fuel.fuel_type_id == id));
        if let Some(fuel) = fuel {
            item.fuel_name = fuel.fuel_name.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::palette;

    #[test]
    fn test_empty_records_render_placeholder() {
        let stock: Vec<StockRecord> = Vec::new();
        let content = TableContent::build(&stock, NO_STOCK, |record| StockRow::from(record));
        assert_eq!(content, TableContent::Placeholder("No stock data available"));
        assert_eq!(content.row_count(), 0);

        let usage: Vec<UsageTransaction> = Vec::new();
        let content = TableContent::build(&usage, NO_USAGE, |usage| UsageRow::from(usage));
        assert_eq!(content, TableContent::Placeholder("No usage transactions found"));
    }

    #[test]
    fn test_records_render_one_row_each() {
        let usage = vec![
            UsageTransaction { transaction_id: "USE-2024-001".to_string(), ..Default::default() },
            UsageTransaction { transaction_id: "USE-2024-002".to_string(), ..Default::default() },
        ];
        let content = TableContent::build(&usage, NO_USAGE, |usage| UsageRow::from(usage));
        assert_eq!(content.row_count(), 2);
    }

    #[test]
    fn test_stock_row_fill_colors() {
        let record = |fill: i64| StockRecord {
            fill_percentage: Some(Decimal::from(fill)),
            ..Default::default()
        };

        assert_eq!(StockRow::from(&record(15)).fill.color, palette::CRITICAL);
        assert_eq!(StockRow::from(&record(35)).fill.color, palette::WARNING);
        assert_eq!(StockRow::from(&record(80)).fill.color, palette::SUCCESS);
    }

    #[test]
    fn test_stock_row_formatting() {
        let record = StockRecord {
            site_name: "North Yard".to_string(),
            fuel_name: "Diesel".to_string(),
            current_quantity: Some(Decimal::new(125049, 1)),
            available_quantity: None,
            fill_percentage: Some(Decimal::new(6255, 2)),
            stock_status: Some("Normal".to_string()),
            last_updated: Some("2024-02-01T09:15:00".to_string()),
            ..Default::default()
        };

        let row = StockRow::from(&record);
        assert_eq!(row.quantity, "12,505L");
        assert_eq!(row.available, "0L");
        assert_eq!(row.fill.width, "62.55%");
        assert_eq!(row.fill.label, "62.6%");
        assert_eq!(row.status, Badge { label: "Normal".to_string(), class: "status-normal" });
        assert_eq!(row.last_updated, "Feb 1, 2024, 09:15 AM");
    }

    #[test]
    fn test_fill_bar_width_is_clamped() {
        assert_eq!(FillBar::from_percentage(Some(Decimal::from(130))).width, "100%");
        assert_eq!(FillBar::from_percentage(None).width, "0%");
        assert_eq!(FillBar::from_percentage(None).label, "0%");
    }

    #[test]
    fn test_forecast_row_badge() {
        let record = ForecastRecord {
            forecast_id: 11,
            site_name: "Depot".to_string(),
            fuel_name: "Petrol".to_string(),
            current_balance: Some(Decimal::from(4200)),
            daily_consumption_rate: Some(Decimal::new(3125, 2)),
            forecast_days_remaining: Some(Decimal::from(2)),
            next_refill_date_estimate: Some("2024-05-03".to_string()),
            confidence_level: Some(Decimal::new(875, 1)),
            ..Default::default()
        };

        let row = ForecastRow::from(&record);
        assert_eq!(row.balance, "4,200L");
        assert_eq!(row.daily_rate, "31.3L/day");
        assert_eq!(row.days_remaining.label, "2 days");
        assert_eq!(row.days_remaining.class, "status-critical");
        assert_eq!(row.next_refill, "May 3, 2024");
        assert_eq!(row.confidence, "88%");
    }

    #[test]
    fn test_operational_hours_row_fallbacks() {
        let entry = OperationalHoursEntry {
            log_date: Some("2024-03-10".to_string()),
            site_name: "Quarry".to_string(),
            equipment_name: "Generator 2".to_string(),
            running_hours: Some(Decimal::new(85, 1)),
            ..Default::default()
        };

        let row = OperationalHoursRow::from(&entry);
        assert_eq!(row.date, "Mar 10, 2024");
        assert_eq!(row.running_hours, "8.5");
        assert_eq!(row.fuel_consumed, "N/A");
        assert_eq!(row.recorded_by, "N/A");
        assert_eq!(row.notes, "N/A");
    }

    #[test]
    fn test_transaction_rows_fall_back_to_system() {
        let refill = RefillTransaction {
            transaction_id: "REF-20240601-081500".to_string(),
            quantity: Some(Decimal::from(10000)),
            unit_cost: Some(Decimal::new(1455, 3)),
            ..Default::default()
        };
        let row = RefillRow::from(&refill);
        assert_eq!(row.transaction_id, "REF-20240601-081500");
        assert_eq!(row.quantity, "10,000L");
        assert_eq!(row.supplier, "N/A");
        assert_eq!(row.unit_cost, "1.46");
        assert_eq!(row.total_cost, "N/A");
        assert_eq!(row.created_by, "System");

        let usage = UsageTransaction {
            transaction_id: "USE-20240601-093000".to_string(),
            created_by: Some("ops".to_string()),
            ..Default::default()
        };
        let row = UsageRow::from(&usage);
        assert_eq!(row.equipment, "N/A");
        assert_eq!(row.quantity, "0L");
        assert_eq!(row.created_by, "ops");
    }

    #[test]
    fn test_equipment_row_badge() {
        let item = Equipment {
            equipment_id: 5,
            site_id: Some(1),
            equipment_name: "Loader".to_string(),
            equipment_code: None,
            fuel_type_id: Some(1),
            consumption_rate: Some(Decimal::new(125, 1)),
            equipment_type: None,
            manufacturer: Some("CAT".to_string()),
            model: None,
            is_active: false,
            site_name: "Quarry".to_string(),
            fuel_name: "Diesel".to_string(),
        };

        let row = EquipmentRow::from(&item);
        assert_eq!(row.status.label, "Inactive");
        assert_eq!(row.status.class, "status-critical");
        assert_eq!(row.equipment_type, "N/A");
        assert_eq!(row.consumption_rate, "12.5");
    }

    #[test]
    fn test_backfill_fuel_names_only_fills_blanks() {
        let diesel = FuelType {
            fuel_type_id: 1,
            fuel_name: "Diesel".to_string(),
            fuel_code: None,
            density: None,
            is_active: true,
        };
        let mut equipment = vec![
            Equipment { equipment_id: 1, fuel_type_id: Some(1), ..Default::default() },
            Equipment {
                equipment_id: 2,
                fuel_type_id: Some(1),
                fuel_name: "Petrol".to_string(),
                ..Default::default()
            },
            Equipment { equipment_id: 3, fuel_type_id: Some(9), ..Default::default() },
        ];

        backfill_fuel_names(&mut equipment, &[diesel]);

        assert_eq!(equipment[0].fuel_name, "Diesel");
        assert_eq!(equipment[1].fuel_name, "Petrol");
        assert_eq!(equipment[2].fuel_name, "");
    }
}

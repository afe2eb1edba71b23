//! Transport records returned by the fuel-control REST API.
//!
//! Every record is a flat projection of a backend row. Decimal columns are
//! serialized by the backend either as JSON numbers or as decimal strings, so
//! they are held as `Option<Decimal>` (which accepts both). Date columns are
//! kept as raw strings and only parsed when formatted for display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ===================== Reference data =====================

/// A physical location holding fuel storage and equipment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Site {
    pub site_id: i32,
    #[serde(default)]
    pub site_name: String,
    pub site_code: Option<String>,
    pub site_type: Option<String>,
    pub location_address: Option<String>,
    pub contact_person: Option<String>,
    pub storage_capacity: Option<Decimal>,
    pub safety_stock_days: Option<i32>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FuelType {
    pub fuel_type_id: i32,
    #[serde(default)]
    pub fuel_name: String,
    pub fuel_code: Option<String>,
    pub density: Option<Decimal>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Equipment {
    pub equipment_id: i32,
    pub site_id: Option<i32>,
    #[serde(default)]
    pub equipment_name: String,
    pub equipment_code: Option<String>,
    pub fuel_type_id: Option<i32>,
    pub consumption_rate: Option<Decimal>,
    pub equipment_type: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub fuel_name: String,
}

fn active_by_default() -> bool {
    true
}

// ===================== Stock & forecasts =====================

/// Current fuel quantity and fill level for a site/fuel-type pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StockRecord {
    pub site_id: Option<i32>,
    #[serde(default)]
    pub site_name: String,
    pub fuel_type_id: Option<i32>,
    #[serde(default)]
    pub fuel_name: String,
    pub current_quantity: Option<Decimal>,
    pub available_quantity: Option<Decimal>,
    pub fill_percentage: Option<Decimal>,
    pub stock_status: Option<String>,
    pub last_updated: Option<String>,
}

/// Server-computed projection of remaining fuel days for a site/fuel pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForecastRecord {
    pub forecast_id: i32,
    pub site_id: Option<i32>,
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub fuel_name: String,
    pub forecast_date: Option<String>,
    pub current_balance: Option<Decimal>,
    pub daily_consumption_rate: Option<Decimal>,
    pub forecast_days_remaining: Option<Decimal>,
    pub next_refill_date_estimate: Option<String>,
    pub confidence_level: Option<Decimal>,
}

/// A what-if variation of a forecast with adjusted consumption parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastScenario {
    pub scenario_id: i32,
    pub forecast_id: Option<i32>,
    #[serde(default)]
    pub scenario_name: String,
    pub adjusted_consumption_rate: Option<Decimal>,
    pub adjusted_safety_factor: Option<Decimal>,
    pub adjusted_days_remaining: Option<Decimal>,
    pub created_date: Option<String>,
}

/// Request body for `POST /forecasts/calculate`. All fields optional; an
/// empty body recalculates every site.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CalculateForecastsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_type_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecast_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    #[serde(alias = "alert_history_id")]
    pub history_id: Option<i32>,
    #[serde(alias = "severity")]
    pub severity_level: Option<String>,
    pub alert_name: Option<String>,
    pub alert_type: Option<String>,
    pub site_name: Option<String>,
    pub fuel_name: Option<String>,
    pub triggered_date: Option<String>,
    #[serde(alias = "alert_message")]
    pub message: Option<String>,
}

// ===================== Logs & transactions =====================

/// A logged equipment runtime record, optionally with fuel consumed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OperationalHoursEntry {
    pub log_id: Option<i32>,
    pub site_id: Option<i32>,
    pub equipment_id: Option<i32>,
    pub log_date: Option<String>,
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub equipment_name: String,
    pub running_hours: Option<Decimal>,
    pub fuel_consumed: Option<Decimal>,
    pub recorded_by: Option<String>,
    pub notes: Option<String>,
}

/// Request body for `POST /operational-hours`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewOperationalHoursEntry {
    pub site_id: i32,
    pub equipment_id: i32,
    pub log_date: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub running_hours: Decimal,
    pub recorded_by: Option<String>,
    pub notes: Option<String>,
}

/// A logged fuel delivery.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RefillTransaction {
    pub transaction_id: String,
    pub refill_date: Option<String>,
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub fuel_name: String,
    pub quantity: Option<Decimal>,
    pub supplier_name: Option<String>,
    pub unit_cost: Option<Decimal>,
    pub total_cost: Option<Decimal>,
    pub created_by: Option<String>,
}

/// A logged fuel consumption event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UsageTransaction {
    pub transaction_id: String,
    pub usage_date: Option<String>,
    #[serde(default)]
    pub site_name: String,
    #[serde(default)]
    pub fuel_name: String,
    pub equipment_name: Option<String>,
    pub quantity: Option<Decimal>,
    pub purpose: Option<String>,
    pub operator_name: Option<String>,
    pub created_by: Option<String>,
}

/// Acknowledgement returned by mutating endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
    pub transaction_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_record_accepts_numbers_and_decimal_strings() {
        let json = r#"[
            {"site_name": "North Yard", "fuel_name": "Diesel", "current_quantity": 1500.5,
             "fill_percentage": "42.10", "stock_status": "Normal"},
            {"site_name": "Depot", "fuel_name": "Petrol", "current_quantity": null}
        ]"#;

        let records: Vec<StockRecord> = serde_json::from_str(json).expect("Should parse stock");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].current_quantity, Some(Decimal::new(15005, 1)));
        assert_eq!(records[0].fill_percentage, Some(Decimal::new(4210, 2)));
        assert_eq!(records[1].current_quantity, None);
        assert_eq!(records[1].fill_percentage, None);
        assert_eq!(records[1].last_updated, None);
    }

    #[test]
    fn test_alert_accepts_short_severity_field() {
        let alert: Alert =
            serde_json::from_str(r#"{"severity": "Critical"}"#).expect("Should parse alert");
        assert_eq!(alert.severity_level.as_deref(), Some("Critical"));

        let alert: Alert =
            serde_json::from_str(r#"{"severity_level": "Low"}"#).expect("Should parse alert");
        assert_eq!(alert.severity_level.as_deref(), Some("Low"));
    }

    #[test]
    fn test_alert_accepts_history_field_names() {
        let json = r#"{"alert_history_id": 1, "alert_name": "Alpha Low Stock",
            "alert_message": "Diesel stock is critically low", "severity_level": "Critical"}"#;

        let alert: Alert = serde_json::from_str(json).expect("Should parse alert");
        assert_eq!(alert.history_id, Some(1));
        assert_eq!(alert.message.as_deref(), Some("Diesel stock is critically low"));
    }

    #[test]
    fn test_transactions_use_prefixed_string_ids() {
        let refills = r#"[
            {"transaction_id": "REF-2025-001", "refill_date": "2025-01-03", "site_name": "Main Warehouse",
             "fuel_name": "Diesel", "quantity": 100000, "supplier_name": "Asia Fuel Trading",
             "unit_cost": 1850.00, "total_cost": 185000000, "created_by": "System"}
        ]"#;
        let refills: Vec<RefillTransaction> = serde_json::from_str(refills).expect("Should parse refills");
        assert_eq!(refills[0].transaction_id, "REF-2025-001");
        assert_eq!(refills[0].quantity, Some(Decimal::from(100000)));

        let usage = r#"[
            {"transaction_id": "USE-2025-001", "usage_date": "2025-01-03", "site_name": "Construction Site Alpha",
             "fuel_name": "Diesel", "equipment_name": "Excavator Alpha 1", "quantity": 157.25,
             "purpose": "Excavation work", "operator_name": "John Operator", "created_by": "Site Supervisor"}
        ]"#;
        let usage: Vec<UsageTransaction> = serde_json::from_str(usage).expect("Should parse usage");
        assert_eq!(usage[0].transaction_id, "USE-2025-001");
        assert_eq!(usage[0].quantity, Some(Decimal::new(15725, 2)));

        let ack: MessageResponse = serde_json::from_str(
            r#"{"message": "Refill recorded", "transaction_id": "REF-20250103-120000"}"#,
        )
        .expect("Should parse acknowledgement");
        assert_eq!(ack.transaction_id.as_deref(), Some("REF-20250103-120000"));
    }

    #[test]
    fn test_calculate_request_omits_unset_fields() {
        let body = serde_json::to_value(CalculateForecastsRequest::default()).unwrap();
        assert_eq!(body, serde_json::json!({}));
    }

    #[test]
    fn test_new_hours_entry_sends_hours_as_number() {
        let entry = NewOperationalHoursEntry {
            site_id: 1,
            equipment_id: 2,
            log_date: "2024-06-01".to_string(),
            running_hours: Decimal::new(75, 1),
            recorded_by: None,
            notes: Some("Night shift".to_string()),
        };

        let body = serde_json::to_value(&entry).unwrap();
        assert_eq!(body["running_hours"], serde_json::json!(7.5));
        assert_eq!(body["recorded_by"], serde_json::Value::Null);
        assert_eq!(body["notes"], "Night shift");
    }

    #[test]
    fn test_site_defaults_to_active() {
        let site: Site =
            serde_json::from_str(r#"{"site_id": 3, "site_name": "Quarry"}"#).unwrap();
        assert!(site.is_active);
        assert_eq!(site.site_code, None);
    }
}

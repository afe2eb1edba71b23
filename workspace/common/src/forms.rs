//! Validation of the quick operational-hours form.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::NewOperationalHoursEntry;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please select a site")]
    MissingSite,
    #[error("Please select equipment")]
    MissingEquipment,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Running hours must be a non-negative number")]
    InvalidHours,
}

/// Raw field values as read from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoursForm {
    pub site_id: String,
    pub equipment_id: String,
    pub log_date: String,
    pub running_hours: String,
    pub recorded_by: String,
    pub notes: String,
}

impl HoursForm {
    /// An empty form dated `today`.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            log_date: today.format("%Y-%m-%d").to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<NewOperationalHoursEntry, FormError> {
        let site_id = self
            .site_id
            .trim()
            .parse::<i32>()
            .map_err(|_| FormError::MissingSite)?;
        let equipment_id = self
            .equipment_id
            .trim()
            .parse::<i32>()
            .map_err(|_| FormError::MissingEquipment)?;
        let log_date = NaiveDate::parse_from_str(self.log_date.trim(), "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate(self.log_date.clone()))?;
        let running_hours = Decimal::from_str(self.running_hours.trim())
            .ok()
            .filter(|hours| !hours.is_sign_negative())
            .ok_or(FormError::InvalidHours)?;

        Ok(NewOperationalHoursEntry {
            site_id,
            equipment_id,
            log_date: log_date.format("%Y-%m-%d").to_string(),
            running_hours,
            recorded_by: non_blank(&self.recorded_by),
            notes: non_blank(&self.notes),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> HoursForm {
        HoursForm {
            site_id: "2".to_string(),
            equipment_id: "14".to_string(),
            log_date: "2024-06-01".to_string(),
            running_hours: "7.5".to_string(),
            recorded_by: " J. Doe ".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_valid_form_builds_request() {
        let entry = filled().validate().expect("Form should be valid");
        assert_eq!(entry.site_id, 2);
        assert_eq!(entry.equipment_id, 14);
        assert_eq!(entry.log_date, "2024-06-01");
        assert_eq!(entry.running_hours, Decimal::new(75, 1));
        assert_eq!(entry.recorded_by.as_deref(), Some("J. Doe"));
        assert_eq!(entry.notes, None);
    }

    #[test]
    fn test_missing_selections_are_rejected() {
        let form = HoursForm { site_id: String::new(), ..filled() };
        assert_eq!(form.validate(), Err(FormError::MissingSite));

        let form = HoursForm { equipment_id: String::new(), ..filled() };
        assert_eq!(form.validate(), Err(FormError::MissingEquipment));
    }

    #[test]
    fn test_bad_hours_and_dates_are_rejected() {
        let form = HoursForm { running_hours: "-1".to_string(), ..filled() };
        assert_eq!(form.validate(), Err(FormError::InvalidHours));

        let form = HoursForm { running_hours: "lots".to_string(), ..filled() };
        assert_eq!(form.validate(), Err(FormError::InvalidHours));

        let form = HoursForm { log_date: "06/01/2024".to_string(), ..filled() };
        assert!(matches!(form.validate(), Err(FormError::InvalidDate(_))));
    }

    #[test]
    fn test_blank_form_is_dated_today() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let form = HoursForm::blank(today);
        assert_eq!(form.log_date, "2024-02-29");
        assert!(form.site_id.is_empty());
    }
}

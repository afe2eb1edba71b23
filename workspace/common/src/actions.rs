//! User-triggered actions that are not plain navigation.
//!
//! Buttons emit a `UiAction`; the frontend's action registry maps each one
//! to its handler.

use crate::section::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    RefreshDashboard,
    RefreshStock,
    CalculateForecasts,
    LoadForecasts,
    ShowScenarios(i32),
    HideScenarioCard,
    ShowForecastInput,
    ShowEquipmentForm,
    EditEquipment(i32),
    ShowHoursForm,
}

impl UiAction {
    /// Informational message for actions that have no behaviour yet.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            UiAction::ShowForecastInput => Some("Forecast input feature coming soon!"),
            UiAction::ShowEquipmentForm => Some("Equipment form feature coming soon!"),
            UiAction::EditEquipment(_) => Some("Equipment editing feature coming soon!"),
            UiAction::ShowHoursForm => Some("Hours form is already visible below!"),
            _ => None,
        }
    }

    /// Section whose data must be reloaded after the action, if any.
    pub fn reloads(&self) -> Option<Section> {
        match self {
            UiAction::RefreshDashboard => Some(Section::Dashboard),
            UiAction::RefreshStock => Some(Section::Stock),
            UiAction::LoadForecasts | UiAction::CalculateForecasts => Some(Section::Forecasting),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_actions_have_notices() {
        assert_eq!(
            UiAction::EditEquipment(3).notice(),
            Some("Equipment editing feature coming soon!")
        );
        assert_eq!(
            UiAction::ShowHoursForm.notice(),
            Some("Hours form is already visible below!")
        );
        assert_eq!(UiAction::RefreshStock.notice(), None);
        assert_eq!(UiAction::ShowScenarios(1).notice(), None);
    }

    #[test]
    fn test_reload_targets() {
        assert_eq!(UiAction::RefreshDashboard.reloads(), Some(Section::Dashboard));
        assert_eq!(UiAction::CalculateForecasts.reloads(), Some(Section::Forecasting));
        assert_eq!(UiAction::HideScenarioCard.reloads(), None);
    }
}

use common::{CalculateForecastsRequest, Section, UiAction};
use yew::prelude::*;

use crate::api_client::{forecasts, ApiClient};
use crate::app_state::{AppAction, AppState};
use crate::common::loader::spawn_load;
use crate::common::loading::LoadingContext;
use crate::common::toast::ToastContext;

/// Maps every `UiAction` to its handler.
#[derive(Clone, PartialEq)]
pub struct ActionRegistry {
    app: UseReducerDispatcher<AppState>,
    client: ApiClient,
    toasts: ToastContext,
    loading: LoadingContext,
}

impl ActionRegistry {
    pub fn new(
        app: UseReducerDispatcher<AppState>,
        client: ApiClient,
        toasts: ToastContext,
        loading: LoadingContext,
    ) -> Self {
        Self {
            app,
            client,
            toasts,
            loading,
        }
    }

    pub fn dispatch(&self, action: UiAction) {
        log::debug!("UI action: {:?}", action);
        match action {
            UiAction::RefreshDashboard | UiAction::RefreshStock | UiAction::LoadForecasts => {
                if let Some(section) = action.reloads() {
                    self.app.dispatch(AppAction::Reload(section));
                }
            }
            UiAction::CalculateForecasts => self.calculate_forecasts(),
            UiAction::ShowScenarios(forecast_id) => {
                self.app.dispatch(AppAction::ShowScenarios(forecast_id))
            }
            UiAction::HideScenarioCard => self.app.dispatch(AppAction::HideScenarios),
            UiAction::ShowForecastInput
            | UiAction::ShowEquipmentForm
            | UiAction::EditEquipment(_)
            | UiAction::ShowHoursForm => {
                if let Some(notice) = action.notice() {
                    self.toasts.show_info(notice);
                }
            }
        }
    }

    /// Event handler that fires `action`, for `onclick` and friends.
    pub fn callback<E: 'static>(&self, action: UiAction) -> Callback<E> {
        let registry = self.clone();
        Callback::from(move |_: E| registry.dispatch(action))
    }

    fn calculate_forecasts(&self) {
        let client = self.client.clone();
        let toasts = self.toasts.clone();
        let app = self.app.clone();

        spawn_load(&self.loading, async move {
            let request = CalculateForecastsRequest::default();
            if forecasts::calculate_forecasts(&client, &request).await.is_ok() {
                toasts.show_success("Forecasts calculated successfully!");
                app.dispatch(AppAction::Reload(Section::Forecasting));
            }
        });
    }
}

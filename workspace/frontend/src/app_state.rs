//! Application-wide state shared through context.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use common::{LoadTicket, Section, SectionRouter};
use yew::prelude::*;

pub type AppContext = UseReducerHandle<AppState>;

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    router: SectionRouter,
    /// Generation of the latest activation, shared by every snapshot of the
    /// state so that in-flight loads can see activations that happened after
    /// they were spawned.
    live_generation: Rc<Cell<u64>>,
    refresh: HashMap<Section, u32>,
    kpi_tick: u32,
    scenario_forecast: Option<i32>,
    alert_count: Option<usize>,
}

pub enum AppAction {
    /// Navigate to the section with the given nav slug.
    Activate(String),
    /// Re-run a section's load, if that section is still shown.
    Reload(Section),
    /// Periodic timer fired.
    Tick,
    ShowScenarios(i32),
    HideScenarios,
    SetAlertCount(usize),
}

impl Default for AppState {
    fn default() -> Self {
        let router = SectionRouter::new();
        Self {
            live_generation: Rc::new(Cell::new(router.generation())),
            router,
            refresh: HashMap::new(),
            kpi_tick: 0,
            scenario_forecast: None,
            alert_count: None,
        }
    }
}

impl AppState {
    pub fn router(&self) -> &SectionRouter {
        &self.router
    }

    pub fn refresh_token(&self, section: Section) -> u32 {
        self.refresh.get(&section).copied().unwrap_or_default()
    }

    pub fn kpi_tick(&self) -> u32 {
        self.kpi_tick
    }

    pub fn scenario_forecast(&self) -> Option<i32> {
        self.scenario_forecast
    }

    pub fn alert_count(&self) -> Option<usize> {
        self.alert_count
    }

    /// Whether a response loaded for `ticket` may still be rendered.
    pub fn accepts(&self, ticket: &LoadTicket) -> bool {
        let current = self.live_generation.get() == ticket.generation;
        if !current {
            log::debug!(
                "Discarding stale {} response (generation {}, now {})",
                ticket.section,
                ticket.generation,
                self.live_generation.get()
            );
        }
        current
    }
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AppAction::Activate(name) => {
                let mut next = (*self).clone();
                let activation = next.router.activate(&name);
                next.live_generation.set(next.router.generation());
                next.scenario_forecast = None;
                log::debug!(
                    "Navigated to '{}': {:?} -> {:?}",
                    name,
                    activation.deactivated,
                    activation.activated
                );
                Rc::new(next)
            }
            AppAction::Reload(section) => {
                if !self.router.is_active(section) {
                    log::debug!("Skipping reload of inactive section {}", section);
                    return self;
                }
                let mut next = (*self).clone();
                *next.refresh.entry(section).or_default() += 1;
                Rc::new(next)
            }
            AppAction::Tick => {
                if !self.router.is_active(Section::Dashboard) {
                    return self;
                }
                let mut next = (*self).clone();
                next.kpi_tick += 1;
                Rc::new(next)
            }
            AppAction::ShowScenarios(forecast_id) => {
                let mut next = (*self).clone();
                next.scenario_forecast = Some(forecast_id);
                Rc::new(next)
            }
            AppAction::HideScenarios => {
                let mut next = (*self).clone();
                next.scenario_forecast = None;
                Rc::new(next)
            }
            AppAction::SetAlertCount(count) => {
                let mut next = (*self).clone();
                next.alert_count = Some(count);
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Rc<AppState> {
        Rc::new(AppState::default())
    }

    #[test]
    fn test_navigation_invalidates_earlier_tickets() {
        let state = start();
        let dashboard = state.router().current_ticket().unwrap();
        assert!(state.accepts(&dashboard));

        let state = state.reduce(AppAction::Activate("stock".to_string()));
        let stock = state.router().current_ticket().unwrap();
        assert_eq!(stock.section, Section::Stock);
        assert!(state.accepts(&stock));
        assert!(!state.accepts(&dashboard));
    }

    #[test]
    fn test_old_snapshots_see_new_activations() {
        let before = start();
        let ticket = before.router().current_ticket().unwrap();

        let _after = before.clone().reduce(AppAction::Activate("usage".to_string()));
        assert!(!before.accepts(&ticket));
    }

    #[test]
    fn test_timer_only_counts_while_dashboard_is_shown() {
        let state = start().reduce(AppAction::Tick);
        assert_eq!(state.kpi_tick(), 1);

        let state = state.reduce(AppAction::Activate("refills".to_string()));
        let state = state.reduce(AppAction::Tick);
        assert_eq!(state.kpi_tick(), 1);
    }

    #[test]
    fn test_reload_of_inactive_section_is_ignored() {
        let state = start().reduce(AppAction::Reload(Section::Forecasting));
        assert_eq!(state.refresh_token(Section::Forecasting), 0);

        let state = state.reduce(AppAction::Activate("forecasting".to_string()));
        let state = state.reduce(AppAction::Reload(Section::Forecasting));
        assert_eq!(state.refresh_token(Section::Forecasting), 1);
    }

    #[test]
    fn test_scenario_card_closes_on_navigation() {
        let state = start()
            .reduce(AppAction::Activate("forecasting".to_string()))
            .reduce(AppAction::ShowScenarios(12));
        assert_eq!(state.scenario_forecast(), Some(12));

        let state = state.reduce(AppAction::Activate("forecasting".to_string()));
        assert_eq!(state.scenario_forecast(), None);
    }
}

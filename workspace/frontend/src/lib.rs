use chrono::Local;
use gloo_timers::callback::Interval;
use yew::prelude::*;

mod actions;
mod app_state;
mod components;
mod router;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod settings;

use crate::actions::ActionRegistry;
use crate::api_client::ApiClient;
use crate::app_state::{AppAction, AppContext, AppState};
use crate::common::loading::LoadingProvider;
use crate::common::toast::ToastProvider;
use crate::components::layout::layout::Layout;
use crate::hooks::{use_loading, use_toasts};
use crate::router::SectionPanel;

/// Wires the shared services together and renders the active section.
#[function_component(Shell)]
fn shell() -> Html {
    let toasts = use_toasts();
    let loading = use_loading();
    let state = use_reducer(AppState::default);
    let settings = settings::get_settings();

    let client = ApiClient::new(&settings.api_base_url, toasts.clone());
    let registry = ActionRegistry::new(state.dispatcher(), client.clone(), toasts, loading);
    let started_at = use_memo((), |_| Local::now().format("%b %-d, %Y, %I:%M:%S %p").to_string());

    // Periodic dashboard refresh; the reducer ignores ticks while another section is shown.
    {
        let dispatcher = state.dispatcher();
        use_effect_with(settings.refresh_interval_ms, move |interval_ms| {
            log::debug!("Starting refresh timer every {} ms", interval_ms);
            let interval = Interval::new(*interval_ms, move || dispatcher.dispatch(AppAction::Tick));
            move || drop(interval)
        });
    }

    html! {
        <ContextProvider<AppContext> context={state}>
            <ContextProvider<ApiClient> context={client}>
                <ContextProvider<ActionRegistry> context={registry}>
                    <Layout started_at={(*started_at).clone()}>
                        <SectionPanel />
                    </Layout>
                </ContextProvider<ActionRegistry>>
            </ContextProvider<ApiClient>>
        </ContextProvider<AppContext>>
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <LoadingProvider>
                <Shell />
            </LoadingProvider>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Fuel Control Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.api_base_url);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}

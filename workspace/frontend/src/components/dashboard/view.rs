use common::dashboard::{recent_forecasts, ALERT_WINDOW_DAYS};
use common::table::{RecentForecastItem, NO_CRITICAL_FORECASTS};
use common::{
    Alert, ApiResult, DashboardKpis, Equipment, ForecastQuery, LoadTicket, Section, Site,
    StockChartData, StockRecord, TableContent, UiAction,
};
use futures::join;
use yew::prelude::*;

use super::chart::StockChart;
use super::kpis::Kpis;
use super::recent::RecentForecasts;
use crate::api_client::{alerts, equipment, forecasts, sites, stock};
use crate::app_state::AppAction;
use crate::common::loader::spawn_load;
use crate::hooks::{use_actions, use_api, use_app, use_loading};

/// KPIs need all four summary requests; one failure leaves them as they were.
fn summarize(
    sites: &ApiResult<Vec<Site>>,
    equipment: &ApiResult<Vec<Equipment>>,
    stock: &ApiResult<Vec<StockRecord>>,
    alerts: &ApiResult<Vec<Alert>>,
) -> Option<DashboardKpis> {
    match (sites, equipment, stock, alerts) {
        (Ok(sites), Ok(equipment), Ok(stock), Ok(alerts)) => {
            Some(DashboardKpis::compute(sites, equipment, stock, alerts))
        }
        _ => {
            log::error!("Dashboard KPIs not updated: a summary request failed");
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub ticket: LoadTicket,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &Props) -> Html {
    let app = use_app();
    let client = use_api();
    let loading = use_loading();
    let actions = use_actions();

    let kpis = use_state(|| None::<DashboardKpis>);
    let chart = use_state(|| None::<StockChartData>);
    let recent = use_state(|| None::<TableContent<RecentForecastItem>>);

    let refresh = app.refresh_token(Section::Dashboard);
    let tick = app.kpi_tick();
    let mounted_tick = use_mut_ref(|| tick);

    // Full load on activation and on every manual refresh
    {
        let app = app.clone();
        let client = client.clone();
        let loading = loading.clone();
        let kpis = kpis.clone();
        let chart = chart.clone();
        let recent = recent.clone();

        use_effect_with((props.ticket, refresh), move |(ticket, _)| {
            let ticket = *ticket;
            log::debug!("Loading dashboard (generation {})", ticket.generation);

            spawn_load(&loading, async move {
                let (site_list, equipment_list, stock_list, alert_list, forecast_list) = join!(
                    sites::get_sites(&client),
                    equipment::get_equipment(&client, None),
                    stock::get_stock(&client),
                    alerts::get_alerts(&client, ALERT_WINDOW_DAYS),
                    forecasts::get_forecasts(&client, ForecastQuery::default()),
                );

                if !app.accepts(&ticket) {
                    return;
                }

                if let Some(summary) = summarize(&site_list, &equipment_list, &stock_list, &alert_list) {
                    app.dispatch(AppAction::SetAlertCount(summary.alert_count));
                    kpis.set(Some(summary));
                }

                match stock_list {
                    Ok(records) => chart.set(Some(StockChartData::from_stock(&records))),
                    Err(err) => log::error!("Stock chart not updated: {}", err),
                }

                match forecast_list {
                    Ok(list) => {
                        let soonest = recent_forecasts(&list);
                        recent.set(Some(TableContent::build(&soonest, NO_CRITICAL_FORECASTS, |f| {
                            RecentForecastItem::from(*f)
                        })));
                    }
                    Err(err) => log::error!("Recent forecasts not updated: {}", err),
                }

                log::info!("Dashboard loaded");
            });
            || ()
        });
    }

    // Periodic refresh of the summary figures only
    {
        let app = app.clone();
        let kpis = kpis.clone();
        let ticket = props.ticket;

        use_effect_with(tick, move |tick| {
            if *tick != *mounted_tick.borrow() {
                log::debug!("Refreshing dashboard KPIs (tick {})", tick);

                spawn_load(&loading, async move {
                    let (site_list, equipment_list, stock_list, alert_list) = join!(
                        sites::get_sites(&client),
                        equipment::get_equipment(&client, None),
                        stock::get_stock(&client),
                        alerts::get_alerts(&client, ALERT_WINDOW_DAYS),
                    );

                    if !app.accepts(&ticket) {
                        return;
                    }

                    if let Some(summary) = summarize(&site_list, &equipment_list, &stock_list, &alert_list) {
                        app.dispatch(AppAction::SetAlertCount(summary.alert_count));
                        kpis.set(Some(summary));
                    }
                });
            }
            || ()
        });
    }

    html! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold">{"Overview"}</h2>
                <button class="btn btn-primary btn-sm" onclick={actions.callback(UiAction::RefreshDashboard)}>
                    <i class="fas fa-sync-alt"></i>{" Refresh"}
                </button>
            </div>

            <Kpis kpis={(*kpis).clone()} />

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                <div class="card bg-base-100 shadow lg:col-span-2">
                    <div class="card-body">
                        <h2 class="card-title">{"Stock Levels by Site"}</h2>
                        <StockChart data={(*chart).clone()} />
                    </div>
                </div>
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{"Running Out Soon"}</h2>
                        <RecentForecasts content={(*recent).clone()} />
                    </div>
                </div>
            </div>
        </div>
    }
}

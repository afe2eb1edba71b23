use chrono::{Local, NaiveDate};
use common::table::{ForecastRow, NO_FORECASTS};
use common::{ForecastQuery, LoadTicket, Section, Site, TableContent, UiAction};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::scenarios::ScenarioCard;
use crate::api_client::{forecasts, sites};
use crate::common::data_table::{status_badge, DataTable};
use crate::common::loader::{spawn_load, LatestRequest};
use crate::hooks::{use_actions, use_api, use_app, use_loading};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub ticket: LoadTicket,
}

#[function_component(Forecasting)]
pub fn forecasting(props: &Props) -> Html {
    let app = use_app();
    let client = use_api();
    let loading = use_loading();
    let actions = use_actions();

    let sites = use_state(Vec::<Site>::new);
    let site_filter = use_state(|| None::<i32>);
    // Each activation remounts this view, so the filter starts at today every time.
    let date_filter = use_state(|| Local::now().date_naive().format(DATE_FORMAT).to_string());
    let content = use_state(|| None::<TableContent<ForecastRow>>);
    let requests = use_mut_ref(LatestRequest::<(ForecastQuery, u32)>::default);
    let refresh = app.refresh_token(Section::Forecasting);

    // Site filter options
    {
        let app = app.clone();
        let client = client.clone();
        let loading = loading.clone();
        let sites = sites.clone();

        use_effect_with(props.ticket, move |ticket| {
            let ticket = *ticket;
            spawn_load(&loading, async move {
                match sites::get_sites(&client).await {
                    Ok(list) if app.accepts(&ticket) => sites.set(list),
                    Ok(_) => {}
                    Err(err) => log::error!("Site filter not updated: {}", err),
                }
            });
            || ()
        });
    }

    // Forecasts table, reloaded whenever a filter changes or a reload is requested
    {
        let app = app.clone();
        let content = content.clone();

        use_effect_with(
            (props.ticket, *site_filter, (*date_filter).clone(), refresh),
            move |(ticket, site_id, date, refresh)| {
                let ticket = *ticket;
                let query = ForecastQuery {
                    site_id: *site_id,
                    forecast_date: NaiveDate::parse_from_str(date, DATE_FORMAT).ok(),
                };
                let request = (query, *refresh);
                requests.borrow_mut().issue(request);

                spawn_load(&loading, async move {
                    match forecasts::get_forecasts(&client, query).await {
                        Ok(list) if app.accepts(&ticket) && requests.borrow().is_current(&request) => {
                            content.set(Some(TableContent::build(&list, NO_FORECASTS, |f| {
                                ForecastRow::from(f)
                            })));
                        }
                        Ok(_) => {}
                        Err(err) => log::error!("Forecasts table not updated: {}", err),
                    }
                });
                || ()
            },
        );
    }

    let on_site_change = {
        let site_filter = site_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            site_filter.set(select.value().parse::<i32>().ok());
        })
    };

    let on_date_change = {
        let date_filter = date_filter.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date_filter.set(input.value());
        })
    };

    let render_row = {
        let actions = actions.clone();
        Callback::from(move |row: ForecastRow| {
            html! {
                <tr key={row.forecast_id}>
                    <td>{row.site}</td>
                    <td>{row.fuel}</td>
                    <td>{row.balance}</td>
                    <td>{row.daily_rate}</td>
                    <td>{status_badge(&row.days_remaining)}</td>
                    <td>{row.next_refill}</td>
                    <td>{row.confidence}</td>
                    <td>
                        <button
                            class="btn btn-xs btn-outline"
                            onclick={actions.callback(UiAction::ShowScenarios(row.forecast_id))}
                        >
                            <i class="fas fa-layer-group"></i>{" Scenarios"}
                        </button>
                    </td>
                </tr>
            }
        })
    };

    html! {
        <div class="space-y-6">
            <div class="flex flex-wrap justify-between items-center gap-2">
                <h2 class="text-2xl font-bold">{"Fuel Forecasts"}</h2>
                <div class="flex gap-2">
                    <button class="btn btn-outline btn-sm" onclick={actions.callback(UiAction::ShowForecastInput)}>
                        <i class="fas fa-plus"></i>{" New Forecast"}
                    </button>
                    <button class="btn btn-primary btn-sm" onclick={actions.callback(UiAction::CalculateForecasts)}>
                        <i class="fas fa-calculator"></i>{" Calculate All"}
                    </button>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="flex flex-wrap items-end gap-4 mb-4">
                        <label class="form-control">
                            <span class="label-text">{"Site"}</span>
                            <select id="forecastSiteFilter" class="select select-bordered select-sm" onchange={on_site_change}>
                                <option value="" selected={site_filter.is_none()}>{"All Sites"}</option>
                                {for sites.iter().map(|site| html! {
                                    <option
                                        key={site.site_id}
                                        value={site.site_id.to_string()}
                                        selected={*site_filter == Some(site.site_id)}
                                    >
                                        {&site.site_name}
                                    </option>
                                })}
                            </select>
                        </label>
                        <label class="form-control">
                            <span class="label-text">{"Forecast date"}</span>
                            <input
                                id="forecastDateFilter"
                                type="date"
                                class="input input-bordered input-sm"
                                value={(*date_filter).clone()}
                                onchange={on_date_change}
                            />
                        </label>
                        <button class="btn btn-sm" onclick={actions.callback(UiAction::LoadForecasts)}>
                            <i class="fas fa-sync-alt"></i>{" Reload"}
                        </button>
                    </div>

                    <DataTable<ForecastRow>
                        id="forecastTable"
                        headers={vec![
                            "Site", "Fuel Type", "Current Balance", "Daily Rate",
                            "Days Remaining", "Next Refill", "Confidence", "Actions",
                        ]}
                        content={(*content).clone()}
                        {render_row}
                    />
                </div>
            </div>

            {match app.scenario_forecast() {
                Some(forecast_id) => html! { <ScenarioCard {forecast_id} ticket={props.ticket} /> },
                None => html! {},
            }}
        </div>
    }
}

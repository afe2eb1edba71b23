use common::table::{ScenarioRow, NO_SCENARIOS};
use common::{LoadTicket, TableContent, UiAction};
use yew::prelude::*;

use crate::api_client::forecasts;
use crate::common::data_table::DataTable;
use crate::common::loader::spawn_load;
use crate::hooks::{use_actions, use_api, use_app, use_loading};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub forecast_id: i32,
    pub ticket: LoadTicket,
}

/// What-if scenarios of one forecast, shown below the forecasts table.
#[function_component(ScenarioCard)]
pub fn scenario_card(props: &Props) -> Html {
    let app = use_app();
    let client = use_api();
    let loading = use_loading();
    let actions = use_actions();
    let content = use_state(|| None::<TableContent<ScenarioRow>>);

    {
        let content = content.clone();
        use_effect_with((props.forecast_id, props.ticket), move |(forecast_id, ticket)| {
            let (forecast_id, ticket) = (*forecast_id, *ticket);
            content.set(None);

            spawn_load(&loading, async move {
                match forecasts::get_scenarios(&client, forecast_id).await {
                    Ok(scenarios) if app.accepts(&ticket) => {
                        content.set(Some(TableContent::build(&scenarios, NO_SCENARIOS, |s| {
                            ScenarioRow::from(s)
                        })));
                    }
                    Ok(_) => {}
                    Err(err) => log::error!("Scenarios for forecast {} not loaded: {}", forecast_id, err),
                }
            });
            || ()
        });
    }

    let render_row = Callback::from(|row: ScenarioRow| {
        html! {
            <tr>
                <td>{row.name}</td>
                <td>{row.consumption_rate}</td>
                <td>{row.safety_factor}</td>
                <td>{row.days_remaining}</td>
                <td>{row.created}</td>
            </tr>
        }
    });

    html! {
        <div id="scenarioCard" class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h2 class="card-title">{format!("Scenarios for forecast #{}", props.forecast_id)}</h2>
                    <button class="btn btn-sm btn-ghost btn-circle" onclick={actions.callback(UiAction::HideScenarioCard)}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <DataTable<ScenarioRow>
                    id="scenarioTable"
                    headers={vec!["Scenario", "Consumption Rate", "Safety Factor", "Days Remaining", "Created"]}
                    content={(*content).clone()}
                    {render_row}
                />
            </div>
        </div>
    }
}

use common::table::{OperationalHoursRow, NO_OPERATIONAL_HOURS};
use common::{LoadTicket, Site, TableContent, UiAction};
use futures::join;
use yew::prelude::*;

use super::form::HoursLogForm;
use crate::api_client::{operational_hours, sites};
use crate::common::data_table::DataTable;
use crate::common::loader::spawn_load;
use crate::hooks::{use_actions, use_api, use_app, use_loading};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub ticket: LoadTicket,
}

#[function_component(OperationalHours)]
pub fn operational_hours_view(props: &Props) -> Html {
    let app = use_app();
    let client = use_api();
    let loading = use_loading();
    let actions = use_actions();

    let sites = use_state(Vec::<Site>::new);
    let content = use_state(|| None::<TableContent<OperationalHoursRow>>);
    // Bumped after a successful submission to reload the log table
    let logged = use_state(|| 0u32);

    {
        let app = app.clone();
        let client = client.clone();
        let loading = loading.clone();
        let sites = sites.clone();
        let content = content.clone();

        use_effect_with(props.ticket, move |ticket| {
            let ticket = *ticket;
            spawn_load(&loading, async move {
                let (site_list, entries) = join!(
                    sites::get_sites(&client),
                    operational_hours::get_operational_hours(&client),
                );
                if !app.accepts(&ticket) {
                    return;
                }

                match site_list {
                    Ok(list) => sites.set(list),
                    Err(err) => log::error!("Site dropdown not updated: {}", err),
                }
                match entries {
                    Ok(entries) => content.set(Some(TableContent::build(&entries, NO_OPERATIONAL_HOURS, |e| {
                        OperationalHoursRow::from(e)
                    }))),
                    Err(err) => log::error!("Operational hours table not updated: {}", err),
                }
            });
            || ()
        });
    }

    {
        let content = content.clone();
        let ticket = props.ticket;

        use_effect_with(*logged, move |logged| {
            if *logged > 0 {
                spawn_load(&loading, async move {
                    match operational_hours::get_operational_hours(&client).await {
                        Ok(entries) if app.accepts(&ticket) => {
                            content.set(Some(TableContent::build(&entries, NO_OPERATIONAL_HOURS, |e| {
                                OperationalHoursRow::from(e)
                            })));
                        }
                        Ok(_) => {}
                        Err(err) => log::error!("Operational hours table not updated: {}", err),
                    }
                });
            }
            || ()
        });
    }

    let on_logged = {
        let logged = logged.clone();
        Callback::from(move |_| logged.set(*logged + 1))
    };

    let render_row = Callback::from(|row: OperationalHoursRow| {
        html! {
            <tr>
                <td>{row.date}</td>
                <td>{row.site}</td>
                <td>{row.equipment}</td>
                <td>{row.running_hours}</td>
                <td>{row.fuel_consumed}</td>
                <td>{row.recorded_by}</td>
                <td>{row.notes}</td>
            </tr>
        }
    });

    html! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold">{"Operational Hours"}</h2>
                <button class="btn btn-primary btn-sm" onclick={actions.callback(UiAction::ShowHoursForm)}>
                    <i class="fas fa-plus"></i>{" Log Hours"}
                </button>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h3 class="card-title text-lg">{"Quick Log"}</h3>
                    <HoursLogForm sites={(*sites).clone()} {on_logged} />
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <DataTable<OperationalHoursRow>
                        id="operationalHoursTable"
                        headers={vec![
                            "Date", "Site", "Equipment", "Running Hours",
                            "Fuel Consumed", "Recorded By", "Notes",
                        ]}
                        content={(*content).clone()}
                        {render_row}
                    />
                </div>
            </div>
        </div>
    }
}

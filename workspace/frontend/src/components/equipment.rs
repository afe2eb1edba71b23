use common::table::{backfill_fuel_names, EquipmentRow, NO_EQUIPMENT};
use common::{LoadTicket, TableContent, UiAction};
use futures::join;
use yew::prelude::*;

use crate::api_client::{equipment, fuel_types};
use crate::common::data_table::{status_badge, DataTable};
use crate::common::loader::spawn_load;
use crate::hooks::{use_actions, use_api, use_app, use_loading};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub ticket: LoadTicket,
}

#[function_component(EquipmentList)]
pub fn equipment_list(props: &Props) -> Html {
    let app = use_app();
    let client = use_api();
    let loading = use_loading();
    let actions = use_actions();
    let content = use_state(|| None::<TableContent<EquipmentRow>>);

    {
        let content = content.clone();
        use_effect_with(props.ticket, move |ticket| {
            let ticket = *ticket;
            spawn_load(&loading, async move {
                let (items, fuels) = join!(
                    equipment::get_equipment(&client, None),
                    fuel_types::get_fuel_types(&client),
                );

                let mut items = match items {
                    Ok(items) => items,
                    Err(err) => {
                        log::error!("Equipment table not updated: {}", err);
                        return;
                    }
                };
                if let Ok(fuels) = fuels {
                    backfill_fuel_names(&mut items, &fuels);
                }

                if app.accepts(&ticket) {
                    content.set(Some(TableContent::build(&items, NO_EQUIPMENT, |e| EquipmentRow::from(e))));
                }
            });
            || ()
        });
    }

    let render_row = {
        let actions = actions.clone();
        Callback::from(move |row: EquipmentRow| {
            html! {
                <tr key={row.equipment_id}>
                    <td>{row.name}</td>
                    <td>{row.site}</td>
                    <td>{row.equipment_type}</td>
                    <td>{row.fuel}</td>
                    <td>{row.consumption_rate}</td>
                    <td>{row.manufacturer}</td>
                    <td>{row.model}</td>
                    <td>{status_badge(&row.status)}</td>
                    <td>
                        <button
                            class="btn btn-xs btn-ghost"
                            title="Edit"
                            onclick={actions.callback(UiAction::EditEquipment(row.equipment_id))}
                        >
                            <i class="fas fa-edit"></i>
                        </button>
                    </td>
                </tr>
            }
        })
    };

    html! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold">{"Equipment"}</h2>
                <button class="btn btn-primary btn-sm" onclick={actions.callback(UiAction::ShowEquipmentForm)}>
                    <i class="fas fa-plus"></i>{" Add Equipment"}
                </button>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <DataTable<EquipmentRow>
                        id="equipmentTable"
                        headers={vec![
                            "Name", "Site", "Type", "Fuel Type", "Consumption Rate",
                            "Manufacturer", "Model", "Status", "Actions",
                        ]}
                        content={(*content).clone()}
                        {render_row}
                    />
                </div>
            </div>
        </div>
    }
}

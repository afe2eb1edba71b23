use common::table::{RefillRow, NO_REFILLS};
use common::{LoadTicket, TableContent};
use yew::prelude::*;

use crate::api_client::transactions;
use crate::common::data_table::DataTable;
use crate::common::loader::spawn_load;
use crate::hooks::{use_api, use_app, use_loading};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub ticket: LoadTicket,
}

#[function_component(Refills)]
pub fn refills(props: &Props) -> Html {
    let app = use_app();
    let client = use_api();
    let loading = use_loading();
    let content = use_state(|| None::<TableContent<RefillRow>>);

    {
        let content = content.clone();
        use_effect_with(props.ticket, move |ticket| {
            let ticket = *ticket;
            spawn_load(&loading, async move {
                match transactions::get_refills(&client).await {
                    Ok(refills) if app.accepts(&ticket) => {
                        content.set(Some(TableContent::build(&refills, NO_REFILLS, |r| RefillRow::from(r))));
                    }
                    Ok(_) => {}
                    Err(err) => log::error!("Refills table not updated: {}", err),
                }
            });
            || ()
        });
    }

    let render_row = Callback::from(|row: RefillRow| {
        html! {
            <tr>
                <td>{row.transaction_id}</td>
                <td>{row.date}</td>
                <td>{row.site}</td>
                <td>{row.fuel}</td>
                <td>{row.quantity}</td>
                <td>{row.supplier}</td>
                <td>{row.unit_cost}</td>
                <td>{row.total_cost}</td>
                <td>{row.created_by}</td>
            </tr>
        }
    });

    html! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold">{"Refill Transactions"}</h2>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <DataTable<RefillRow>
                        id="refillsTable"
                        headers={vec![
                            "ID", "Date", "Site", "Fuel Type", "Quantity",
                            "Supplier", "Unit Cost", "Total Cost", "Created By",
                        ]}
                        content={(*content).clone()}
                        {render_row}
                    />
                </div>
            </div>
        </div>
    }
}

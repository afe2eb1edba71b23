use common::table::{UsageRow, NO_USAGE};
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

#[function_component(Usage)]
pub fn usage(props: &Props) -> Html {
    let app = use_app();
    let client = use_api();
    let loading = use_loading();
    let content = use_state(|| None::<TableContent<UsageRow>>);

    {
        let content = content.clone();
        use_effect_with(props.ticket, move |ticket| {
            let ticket = *ticket;
            spawn_load(&loading, async move {
                match transactions::get_usage(&client).await {
                    Ok(usage) if app.accepts(&ticket) => {
                        content.set(Some(TableContent::build(&usage, NO_USAGE, |u| UsageRow::from(u))));
                    }
                    Ok(_) => {}
                    Err(err) => log::error!("Usage table not updated: {}", err),
                }
            });
            || ()
        });
    }

    let render_row = Callback::from(|row: UsageRow| {
        html! {
            <tr>
                <td>{row.transaction_id}</td>
                <td>{row.date}</td>
                <td>{row.site}</td>
                <td>{row.fuel}</td>
                <td>{row.equipment}</td>
                <td>{row.quantity}</td>
                <td>{row.purpose}</td>
                <td>{row.operator}</td>
                <td>{row.created_by}</td>
            </tr>
        }
    });

    html! {
        <div class="space-y-6">
            <h2 class="text-2xl font-bold">{"Usage Transactions"}</h2>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <DataTable<UsageRow>
                        id="usageTable"
                        headers={vec![
                            "ID", "Date", "Site", "Fuel Type", "Equipment",
                            "Quantity", "Purpose", "Operator", "Created By",
                        ]}
                        content={(*content).clone()}
                        {render_row}
                    />
                </div>
            </div>
        </div>
    }
}

use common::table::{StockRow, NO_STOCK};
use common::{LoadTicket, Section, TableContent, UiAction};
use yew::prelude::*;

use crate::api_client::stock;
use crate::common::data_table::{fill_bar, status_badge, DataTable};
use crate::common::loader::spawn_load;
use crate::hooks::{use_actions, use_api, use_app, use_loading};

#[derive(Properties, PartialEq)]
pub struct Props {
    pub ticket: LoadTicket,
}

#[function_component(Stock)]
pub fn stock_levels(props: &Props) -> Html {
    let app = use_app();
    let client = use_api();
    let loading = use_loading();
    let actions = use_actions();
    let content = use_state(|| None::<TableContent<StockRow>>);
    let refresh = app.refresh_token(Section::Stock);

    {
        let app = app.clone();
        let content = content.clone();
        use_effect_with((props.ticket, refresh), move |(ticket, _)| {
            let ticket = *ticket;
            spawn_load(&loading, async move {
                match stock::get_stock(&client).await {
                    Ok(records) if app.accepts(&ticket) => {
                        content.set(Some(TableContent::build(&records, NO_STOCK, |r| StockRow::from(r))));
                    }
                    Ok(_) => {}
                    Err(err) => log::error!("Stock table not updated: {}", err),
                }
            });
            || ()
        });
    }

    let render_row = Callback::from(|row: StockRow| {
        html! {
            <tr>
                <td>{row.site}</td>
                <td>{row.fuel}</td>
                <td>{row.quantity}</td>
                <td>{row.available}</td>
                <td>{fill_bar(&row.fill)}</td>
                <td>{status_badge(&row.status)}</td>
                <td>{row.last_updated}</td>
            </tr>
        }
    });

    html! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h2 class="text-2xl font-bold">{"Current Stock Levels"}</h2>
                <button class="btn btn-primary btn-sm" onclick={actions.callback(UiAction::RefreshStock)}>
                    <i class="fas fa-sync-alt"></i>{" Refresh"}
                </button>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <DataTable<StockRow>
                        id="stockTable"
                        headers={vec![
                            "Site", "Fuel Type", "Current Quantity", "Available",
                            "Fill Level", "Status", "Last Updated",
                        ]}
                        content={(*content).clone()}
                        {render_row}
                    />
                </div>
            </div>
        </div>
    }
}

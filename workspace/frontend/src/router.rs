use common::{LoadTicket, Section};
use yew::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::components::equipment::EquipmentList;
use crate::components::forecasting::Forecasting;
use crate::components::operational_hours::OperationalHours;
use crate::components::refills::Refills;
use crate::components::stock::Stock;
use crate::components::usage::Usage;
use crate::hooks::use_app;

fn switch(ticket: LoadTicket) -> Html {
    log::trace!("Rendering {} panel", ticket.section);
    match ticket.section {
        Section::Dashboard => html! { <Dashboard {ticket} /> },
        Section::Forecasting => html! { <Forecasting {ticket} /> },
        Section::Stock => html! { <Stock {ticket} /> },
        Section::Equipment => html! { <EquipmentList {ticket} /> },
        Section::OperationalHours => html! { <OperationalHours {ticket} /> },
        Section::Refills => html! { <Refills {ticket} /> },
        Section::Usage => html! { <Usage {ticket} /> },
    }
}

/// The one visible content panel.
///
/// Each activation mounts a fresh panel, which runs that section's load.
#[function_component(SectionPanel)]
pub fn section_panel() -> Html {
    let app = use_app();

    match app.router().current_ticket() {
        Some(ticket) => html! {
            <section
                key={ticket.generation.to_string()}
                id={format!("{}-section", ticket.section.slug())}
                class="content-section active"
            >
                {switch(ticket)}
            </section>
        },
        None => {
            log::warn!("No panel for '{}'", app.router().nav_highlight());
            html! {}
        }
    }
}

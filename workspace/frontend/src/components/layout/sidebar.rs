use common::Section;
use yew::prelude::*;

use crate::app_state::AppAction;
use crate::hooks::use_app;

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let app = use_app();
    let highlighted = app.router().nav_highlight().to_string();

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="main-drawer"></label>
            <ul class="menu p-4 w-72 min-h-full bg-base-100 text-base-content border-r border-base-300">
                <li class="mb-4">
                    <div class="flex items-center gap-3 px-2">
                        <div class="w-10 h-10 rounded-lg bg-primary flex items-center justify-center text-primary-content font-bold text-2xl">
                            <i class="fas fa-gas-pump"></i>
                        </div>
                        <span class="text-2xl font-bold tracking-tight">{"Fuel Control"}</span>
                    </div>
                </li>

                {for Section::ALL.iter().map(|section| {
                    let slug = section.slug();
                    let onclick = {
                        let dispatcher = app.dispatcher();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            dispatcher.dispatch(AppAction::Activate(slug.to_string()));
                        })
                    };

                    html! {
                        <li key={slug}>
                            <a
                                href="#"
                                data-section={slug}
                                class={classes!("nav-link", (highlighted == slug).then_some("active"))}
                                {onclick}
                            >
                                <i class={classes!(section.icon(), "w-5")}></i>
                                {section.title()}
                            </a>
                        </li>
                    }
                })}
            </ul>
        </div>
    }
}

use yew::prelude::*;

use crate::hooks::use_app;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let app = use_app();
    let title = app
        .router()
        .active()
        .map(|section| section.title())
        .unwrap_or("Fuel Control");

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-none lg:hidden">
                <label aria-label="open sidebar" class="btn btn-square btn-ghost" for="main-drawer">
                    <i class="fas fa-bars text-xl"></i>
                </label>
            </div>
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold" id="page-title">{title}</h1>
            </div>
            <div class="flex-none">
                <div class="indicator btn btn-ghost btn-circle" title="Alerts in the last 24 hours">
                    <i class="fas fa-bell text-xl"></i>
                    {match app.alert_count() {
                        Some(count) => html! {
                            <span id="notificationCount" class="badge badge-sm badge-error indicator-item">
                                {count}
                            </span>
                        },
                        None => html! {},
                    }}
                </div>
            </div>
        </div>
    }
}

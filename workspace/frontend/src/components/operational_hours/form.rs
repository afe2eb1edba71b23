use chrono::{Local, NaiveDate};
use common::{Equipment, HoursForm, Site};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api_client::equipment::get_equipment;
use crate::api_client::operational_hours::log_operational_hours;
use crate::common::loader::spawn_load;
use crate::hooks::{use_api, use_loading, use_toasts};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn input_setter(form: &UseStateHandle<HoursForm>, apply: fn(&mut HoursForm, String)) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub sites: Vec<Site>,
    /// Fired after an entry was stored.
    pub on_logged: Callback<()>,
}

/// Quick entry form for equipment running hours.
#[function_component(HoursLogForm)]
pub fn hours_log_form(props: &Props) -> Html {
    let client = use_api();
    let loading = use_loading();
    let toasts = use_toasts();

    let form = use_state(|| HoursForm::blank(today()));
    let equipment_options = use_state(Vec::<Equipment>::new);
    // Site whose equipment the dropdown should show; older responses are dropped.
    let requested_site = use_mut_ref(|| None::<i32>);

    let on_site_change = {
        let client = client.clone();
        let loading = loading.clone();
        let form = form.clone();
        let equipment_options = equipment_options.clone();
        let requested_site = requested_site.clone();

        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            let site_id = value.parse::<i32>().ok();

            form.set(HoursForm {
                site_id: value,
                equipment_id: String::new(),
                ..(*form).clone()
            });
            *requested_site.borrow_mut() = site_id;
            equipment_options.set(Vec::new());

            let Some(site_id) = site_id else {
                return;
            };

            let client = client.clone();
            let equipment_options = equipment_options.clone();
            let requested_site = requested_site.clone();
            spawn_load(&loading, async move {
                match get_equipment(&client, Some(site_id)).await {
                    Ok(items) if *requested_site.borrow() == Some(site_id) => equipment_options.set(items),
                    Ok(_) => log::debug!("Dropping equipment list for site {}: selection changed", site_id),
                    Err(err) => log::error!("Equipment load error: {}", err),
                }
            });
        })
    };

    let on_equipment_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(HoursForm {
                equipment_id: select.value(),
                ..(*form).clone()
            });
        })
    };

    let on_notes_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(HoursForm {
                notes: area.value(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let equipment_options = equipment_options.clone();
        let on_logged = props.on_logged.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let entry = match form.validate() {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("Hours form rejected: {}", err);
                    toasts.show_warning(err.to_string());
                    return;
                }
            };

            let client = client.clone();
            let toasts = toasts.clone();
            let form = form.clone();
            let equipment_options = equipment_options.clone();
            let requested_site = requested_site.clone();
            let on_logged = on_logged.clone();
            spawn_load(&loading, async move {
                if log_operational_hours(&client, &entry).await.is_ok() {
                    toasts.show_success("Operational hours logged successfully!");
                    form.set(HoursForm::blank(today()));
                    *requested_site.borrow_mut() = None;
                    equipment_options.set(Vec::new());
                    on_logged.emit(());
                }
            });
        })
    };

    html! {
        <form id="quickHoursForm" class="grid grid-cols-1 md:grid-cols-3 gap-4" onsubmit={on_submit}>
            <label class="form-control">
                <span class="label-text">{"Site"}</span>
                <select id="hoursLogSite" class="select select-bordered" onchange={on_site_change}>
                    <option value="" selected={form.site_id.is_empty()}>{"Select Site"}</option>
                    {for props.sites.iter().map(|site| {
                        let value = site.site_id.to_string();
                        let selected = form.site_id == value;
                        html! {
                            <option key={site.site_id} selected={selected} value={value}>
                                {&site.site_name}
                            </option>
                        }
                    })}
                </select>
            </label>

            <label class="form-control">
                <span class="label-text">{"Equipment"}</span>
                <select id="hoursLogEquipment" class="select select-bordered" onchange={on_equipment_change}>
                    <option value="" selected={form.equipment_id.is_empty()}>{"Select Equipment"}</option>
                    {for equipment_options.iter().map(|item| {
                        let value = item.equipment_id.to_string();
                        let selected = form.equipment_id == value;
                        html! {
                            <option key={item.equipment_id} selected={selected} value={value}>
                                {&item.equipment_name}
                            </option>
                        }
                    })}
                </select>
            </label>

            <label class="form-control">
                <span class="label-text">{"Date"}</span>
                <input
                    id="hoursLogDate"
                    type="date"
                    class="input input-bordered"
                    value={form.log_date.clone()}
                    oninput={input_setter(&form, |f, v| f.log_date = v)}
                />
            </label>

            <label class="form-control">
                <span class="label-text">{"Running Hours"}</span>
                <input
                    id="hoursLogHours"
                    type="number"
                    step="0.1"
                    min="0"
                    class="input input-bordered"
                    value={form.running_hours.clone()}
                    oninput={input_setter(&form, |f, v| f.running_hours = v)}
                />
            </label>

            <label class="form-control">
                <span class="label-text">{"Recorded By"}</span>
                <input
                    id="hoursLogRecordedBy"
                    type="text"
                    class="input input-bordered"
                    value={form.recorded_by.clone()}
                    oninput={input_setter(&form, |f, v| f.recorded_by = v)}
                />
            </label>

            <label class="form-control md:col-span-3">
                <span class="label-text">{"Notes"}</span>
                <textarea
                    id="hoursLogNotes"
                    class="textarea textarea-bordered"
                    value={form.notes.clone()}
                    oninput={on_notes_input}
                />
            </label>

            <div class="md:col-span-3 flex justify-end">
                <button type="submit" class="btn btn-primary">
                    <i class="fas fa-save"></i>{" Log Hours"}
                </button>
            </div>
        </form>
    }
}

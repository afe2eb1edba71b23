use std::cell::Cell;
use std::rc::Rc;

use common::Severity;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::settings;

fn icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "fas fa-info-circle",
        Severity::Success => "fas fa-check-circle",
        Severity::Warning => "fas fa-exclamation-triangle",
        Severity::Error => "fas fa-exclamation-circle",
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub severity: Severity,
    /// Set once the display time is over; the toast fades until removed.
    pub leaving: bool,
}

#[derive(Default, PartialEq)]
pub struct ToastList {
    toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Fade(usize),
    Remove(usize),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Fade(id) => {
                if let Some(toast) = toasts.iter_mut().find(|t| t.id == id) {
                    toast.leaving = true;
                }
            }
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

/// Handle for raising notifications. Every call shows its own message;
/// there is no queue and no de-duplication.
#[derive(Clone)]
pub struct ToastContext {
    dispatcher: UseReducerDispatcher<ToastList>,
    next_id: Rc<Cell<usize>>,
    duration_ms: u32,
    fade_ms: u32,
}

impl PartialEq for ToastContext {
    fn eq(&self, other: &Self) -> bool {
        self.dispatcher == other.dispatcher
            && Rc::ptr_eq(&self.next_id, &other.next_id)
            && self.duration_ms == other.duration_ms
            && self.fade_ms == other.fade_ms
    }
}

impl ToastContext {
    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        self.dispatcher.dispatch(ToastAction::Push(Toast {
            id,
            message: message.into(),
            severity,
            leaving: false,
        }));

        let context = self.clone();
        Timeout::new(self.duration_ms, move || context.dismiss(id)).forget();
    }

    /// Starts the fade-out of one toast and removes it once faded.
    pub fn dismiss(&self, id: usize) {
        self.dispatcher.dispatch(ToastAction::Fade(id));
        let dispatcher = self.dispatcher.clone();
        Timeout::new(self.fade_ms, move || dispatcher.dispatch(ToastAction::Remove(id))).forget();
    }

    pub fn show_info(&self, message: impl Into<String>) {
        self.show(message, Severity::Info);
    }

    pub fn show_success(&self, message: impl Into<String>) {
        self.show(message, Severity::Success);
    }

    pub fn show_warning(&self, message: impl Into<String>) {
        self.show(message, Severity::Warning);
    }

    pub fn show_error(&self, message: impl Into<String>) {
        self.show(message, Severity::Error);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_memo((), |_| Cell::new(0usize));

    let context = {
        let settings = settings::get_settings();
        ToastContext {
            dispatcher: list.dispatcher(),
            next_id,
            duration_ms: settings.toast_duration_ms,
            fade_ms: settings.toast_fade_ms,
        }
    };

    html! {
        <ContextProvider<ToastContext> context={context.clone()}>
            {props.children.clone()}
            <div id="notifications" class="toast toast-top toast-end z-50">
                {for list.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let context = context.clone();
                        Callback::from(move |_| context.dismiss(id))
                    };

                    html! {
                        <div
                            key={id}
                            class={classes!(
                                "notification",
                                format!("notification-{}", toast.severity.as_str()),
                                toast.leaving.then_some("notification-leaving"),
                            )}
                            style={format!("background-color: {};", toast.severity.color())}
                        >
                            <i class={icon(toast.severity)}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

use yew::prelude::*;

use crate::actions::ActionRegistry;
use crate::api_client::ApiClient;
use crate::app_state::AppContext;
use crate::common::loading::LoadingContext;
use crate::common::toast::ToastContext;

#[hook]
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext provider missing")
}

#[hook]
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient provider missing")
}

#[hook]
pub fn use_actions() -> ActionRegistry {
    use_context::<ActionRegistry>().expect("ActionRegistry provider missing")
}

#[hook]
pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().expect("ToastProvider missing")
}

#[hook]
pub fn use_loading() -> LoadingContext {
    use_context::<LoadingContext>().expect("LoadingProvider missing")
}

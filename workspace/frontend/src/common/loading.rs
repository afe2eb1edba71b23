use std::rc::Rc;

use yew::prelude::*;

/// Number of loads currently in flight.
#[derive(Default, PartialEq)]
pub struct LoadingState {
    pending: usize,
}

impl LoadingState {
    pub fn is_active(&self) -> bool {
        self.pending > 0
    }
}

pub enum LoadingAction {
    Begin,
    End,
}

impl Reducible for LoadingState {
    type Action = LoadingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let pending = match action {
            LoadingAction::Begin => self.pending + 1,
            LoadingAction::End => self.pending.saturating_sub(1),
        };
        Rc::new(Self { pending })
    }
}

#[derive(Clone, PartialEq)]
pub struct LoadingContext {
    dispatch: Callback<LoadingAction>,
}

impl LoadingContext {
    pub fn new(dispatch: Callback<LoadingAction>) -> Self {
        Self { dispatch }
    }

    /// Shows the indicator until the returned guard is dropped.
    pub fn begin(&self) -> LoadingGuard {
        self.dispatch.emit(LoadingAction::Begin);
        LoadingGuard {
            dispatch: self.dispatch.clone(),
        }
    }
}

/// Keeps the global loading indicator visible while alive.
///
/// Dropping it ends the load on every path, failures included.
pub struct LoadingGuard {
    dispatch: Callback<LoadingAction>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.dispatch.emit(LoadingAction::End);
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingProviderProps {
    pub children: Children,
}

#[function_component(LoadingProvider)]
pub fn loading_provider(props: &LoadingProviderProps) -> Html {
    let state = use_reducer(LoadingState::default);
    let dispatch = {
        let dispatcher = state.dispatcher();
        use_callback((), move |action: LoadingAction, _| dispatcher.dispatch(action))
    };
    let context = LoadingContext::new(dispatch);

    html! {
        <ContextProvider<LoadingContext> context={context}>
            {props.children.clone()}
            <LoadingSpinner active={state.is_active()} />
        </ContextProvider<LoadingContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    pub active: bool,
}

/// Full-page overlay spinner
#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    html! {
        <div
            id="loadingSpinner"
            class={classes!("loading-overlay", props.active.then_some("active"))}
            hidden={!props.active}
        >
            <span class="loading loading-spinner loading-lg"></span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Context whose actions are folded into a plain `LoadingState`.
    fn recording_context() -> (LoadingContext, Rc<RefCell<Rc<LoadingState>>>) {
        let state = Rc::new(RefCell::new(Rc::new(LoadingState::default())));
        let sink = state.clone();
        let context = LoadingContext::new(Callback::from(move |action: LoadingAction| {
            let current = sink.borrow().clone();
            *sink.borrow_mut() = current.reduce(action);
        }));
        (context, state)
    }

    fn failing_load(loading: &LoadingContext) -> Result<(), String> {
        let _guard = loading.begin();
        Err("HTTP 500: Internal Server Error".to_string())?;
        Ok(())
    }

    #[test]
    fn test_guard_shows_indicator_until_dropped() {
        let (loading, state) = recording_context();
        let guard = loading.begin();
        assert!(state.borrow().is_active());

        drop(guard);
        assert!(!state.borrow().is_active());
    }

    #[test]
    fn test_failed_load_clears_indicator() {
        let (loading, state) = recording_context();
        let outer = loading.begin();

        assert!(failing_load(&loading).is_err());
        assert!(state.borrow().is_active());

        drop(outer);
        assert!(!state.borrow().is_active());
    }

    fn apply(state: Rc<LoadingState>, action: LoadingAction) -> Rc<LoadingState> {
        state.reduce(action)
    }

    #[test]
    fn test_overlapping_loads_keep_indicator_visible() {
        let state = Rc::new(LoadingState::default());
        let state = apply(state, LoadingAction::Begin);
        let state = apply(state, LoadingAction::Begin);
        let state = apply(state, LoadingAction::End);
        assert!(state.is_active());

        let state = apply(state, LoadingAction::End);
        assert!(!state.is_active());
    }

    #[test]
    fn test_extra_end_does_not_underflow() {
        let state = apply(Rc::new(LoadingState::default()), LoadingAction::End);
        assert!(!state.is_active());
        let state = apply(state, LoadingAction::Begin);
        assert!(state.is_active());
    }
}

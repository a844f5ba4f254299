use owlsite_core::{SiteAction, SiteState};
use std::rc::Rc;
use yew::prelude::*;

/// Reducer-backed page state. Every mutation goes through [`SiteState::apply`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub site: Rc<SiteState>,
}

impl Reducible for AppState {
    type Action = SiteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = Rc::unwrap_or_clone(self);
        let repaint = Rc::make_mut(&mut next.site).apply(action);
        log::trace!("repaint {repaint:?}");
        Rc::new(next)
    }
}

pub type AppStateHandle = UseReducerHandle<AppState>;

#[hook]
pub fn use_app_state() -> AppStateHandle {
    use_reducer_eq(AppState::default)
}

#[cfg(target_arch = "wasm32")]
use crate::router::Route;
use owlsite_core::SiteState;
use std::rc::Rc;
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod handlers;
pub mod state;

pub use handlers::AppHandlers;
pub use state::AppState;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);

    let sequencer = use_mut_ref(owlsite_core::SwitchSequencer::default);
    let sink: Rc<dyn owlsite_core::AnalyticsSink> = use_memo((), |()| crate::analytics::GtagSink);
    let handlers = AppHandlers::new(&app_state, &sequencer, &sink);
    let site = Rc::clone(&app_state.site);

    html! {
        <Switch<Route> render={move |route: Route| render_route(&route, &site, &handlers)} />
    }
}

/// Page for `route` given the current site state.
#[must_use]
pub fn render_route(route: &crate::router::Route, site: &Rc<SiteState>, handlers: &AppHandlers) -> Html {
    use crate::pages::event::EventPage;
    use crate::pages::menu::MenuPage;
    use crate::pages::not_found::NotFound;
    use crate::router::Route;

    match route {
        Route::Event => html! { <EventPage site={Rc::clone(site)} handlers={handlers.clone()} /> },
        Route::Menu => html! { <MenuPage site={Rc::clone(site)} handlers={handlers.clone()} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

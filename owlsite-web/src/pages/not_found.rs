use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main id="main" class="page page--not-found">
            <h1>{ "404" }</h1>
            <Link<Route> to={Route::Event}>{ "←" }</Link<Route>>
        </main>
    }
}

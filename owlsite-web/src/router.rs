use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Event,
    #[at("/menu")]
    Menu,
    #[at("/404")]
    #[not_found]
    NotFound,
}

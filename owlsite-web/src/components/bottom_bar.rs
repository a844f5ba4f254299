use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub price: AttrValue,
    pub tickets_label: AttrValue,
    pub menu_label: AttrValue,
    pub on_ticket: Callback<()>,
    pub on_whatsapp: Callback<()>,
}

/// Sticky bar with the ticket price and purchase actions. Needs a router context.
#[function_component(BottomBar)]
pub fn bottom_bar(p: &Props) -> Html {
    let ticket = {
        let cb = p.on_ticket.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let whatsapp = {
        let cb = p.on_whatsapp.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <footer class="bottom-bar">
            <span class="bottom-bar__price">{ p.price.clone() }</span>
            <Link<Route> to={Route::Menu} classes="bottom-bar__menu">
                { p.menu_label.clone() }
            </Link<Route>>
            <button id="whatsapp-btn" type="button" class="bottom-bar__whatsapp" aria-label="WhatsApp" onclick={whatsapp}>
                <i class="ph-bold ph-whatsapp-logo" aria-hidden="true"></i>
            </button>
            <button id="ticket-btn" type="button" class="bottom-bar__ticket" onclick={ticket}>
                { p.tickets_label.clone() }
            </button>
        </footer>
    }
}

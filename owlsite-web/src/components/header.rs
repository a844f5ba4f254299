use owlsite_core::Lang;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
    pub share_label: AttrValue,
    pub on_cycle_lang: Callback<()>,
    pub on_share: Callback<()>,
}

/// Floating header actions: the language button cycles en → ru → ka.
#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let cycle = {
        let cb = p.on_cycle_lang.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let share = {
        let cb = p.on_share.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let next = p.lang.next();
    html! {
        <header class="page-header" role="banner">
            <button
                id="lang-btn"
                type="button"
                class="page-header__lang"
                aria-label={next.native_name()}
                onclick={cycle}
            >
                { p.lang.code().to_uppercase() }
            </button>
            <button
                id="share-btn"
                type="button"
                class="page-header__share"
                aria-label={p.share_label.clone()}
                onclick={share}
            >
                <i class="ph-bold ph-share-network" aria-hidden="true"></i>
            </button>
        </header>
    }
}

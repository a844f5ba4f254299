use owlsite_core::ItemType;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: ItemType,
    pub bar_label: AttrValue,
    pub food_label: AttrValue,
    pub on_select: Callback<ItemType>,
}

#[function_component(TypeToggle)]
pub fn type_toggle(p: &Props) -> Html {
    let button = |kind: ItemType, label: &AttrValue| {
        let active = p.active == kind;
        let onclick = {
            let cb = p.on_select.clone();
            Callback::from(move |_| cb.emit(kind))
        };
        html! {
            <button
                id={format!("{}-button", kind.as_str())}
                type="button"
                role="tab"
                aria-selected={active.to_string()}
                class={classes!("type-toggle__btn", active.then_some("type-toggle__btn--active"))}
                {onclick}
            >
                { label.clone() }
            </button>
        }
    };
    html! {
        <div class="type-toggle" role="tablist">
            { button(ItemType::Bar, &p.bar_label) }
            { button(ItemType::Food, &p.food_label) }
        </div>
    }
}

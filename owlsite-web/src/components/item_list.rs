use crate::paths::image_url;
use owlsite_core::{ItemCard, ItemId};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CardProps {
    pub card: ItemCard,
    pub on_open: Callback<ItemId>,
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(ItemTile)]
pub fn item_tile(p: &CardProps) -> Html {
    let card = &p.card;
    let onclick = {
        let cb = p.on_open.clone();
        let id = card.id;
        Callback::from(move |_| cb.emit(id))
    };
    let class = classes!(
        "item-card",
        p.compact.then_some("item-card--compact"),
        (!card.has_image).then_some("item-card--placeholder"),
    );
    html! {
        <button type="button" id={card.id.to_string()} {class} {onclick}>
            <img class="item-card__image" src={image_url(&card.image)} alt={card.name.clone()} loading="lazy" />
            if card.popular {
                <span class="item-card__popular" aria-hidden="true"></span>
            }
            <span class="item-card__name">{ card.name.clone() }</span>
            <span class="item-card__price">{ card.price.clone() }</span>
        </button>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cards: Vec<ItemCard>,
    pub on_open: Callback<ItemId>,
}

#[function_component(ItemList)]
pub fn item_list(p: &Props) -> Html {
    html! {
        <div id="items-grid" class="item-list">
            { for p.cards.iter().map(|card| html! {
                <ItemTile key={card.id.0} card={card.clone()} on_open={p.on_open.clone()} />
            }) }
        </div>
    }
}

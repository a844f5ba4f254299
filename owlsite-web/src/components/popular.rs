use super::item_list::ItemTile;
use owlsite_core::{ItemCard, ItemId};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub cards: Vec<ItemCard>,
    pub on_open: Callback<ItemId>,
}

/// Horizontal "popular now" strip; hidden when nothing is flagged.
#[function_component(PopularStrip)]
pub fn popular_strip(p: &Props) -> Html {
    if p.cards.is_empty() {
        return Html::default();
    }
    html! {
        <section class="popular">
            <h3 class="section-title">{ p.title.clone() }</h3>
            <div id="popular-now-carousel" class="popular__strip">
                { for p.cards.iter().map(|card| html! {
                    <ItemTile key={card.id.0} card={card.clone()} on_open={p.on_open.clone()} compact=true />
                }) }
            </div>
        </section>
    }
}

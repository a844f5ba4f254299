use yew::prelude::*;

/// A category tile: canonical key plus its translated caption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTile {
    pub key: String,
    pub label: String,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub tiles: Vec<CategoryTile>,
    pub active: Option<String>,
    pub on_select: Callback<String>,
}

#[function_component(CategoryGrid)]
pub fn category_grid(p: &Props) -> Html {
    html! {
        <div id="categories-carousel" class="category-grid">
            { for p.tiles.iter().map(|tile| {
                let active = p.active.as_deref() == Some(tile.key.as_str());
                let onclick = {
                    let cb = p.on_select.clone();
                    let key = tile.key.clone();
                    Callback::from(move |_| cb.emit(key.clone()))
                };
                html! {
                    <button
                        type="button"
                        key={tile.key.clone()}
                        class={classes!("category-tab", active.then_some("category-tab--active"))}
                        aria-pressed={active.to_string()}
                        {onclick}
                    >
                        { tile.label.clone() }
                    </button>
                }
            }) }
        </div>
    }
}

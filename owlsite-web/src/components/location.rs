use owlsite_core::Location;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub location: Location,
    pub map_image: AttrValue,
    pub open_map_label: AttrValue,
    pub on_open_map: Callback<()>,
}

#[function_component(LocationCard)]
pub fn location_card(p: &Props) -> Html {
    let open_map = {
        let cb = p.on_open_map.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let loc = &p.location;
    html! {
        <section class="location">
            <h3 id="location-title" class="section-title">{ p.title.clone() }</h3>
            <div class="location__card">
                <div class="location__text">
                    <p class="location__name">{ loc.name.clone() }</p>
                    <p class="location__address">{ loc.address.clone() }</p>
                    if !loc.zone.is_empty() {
                        <p class="location__zone">{ loc.zone.clone() }</p>
                    }
                </div>
                <img class="location__map" src={p.map_image.clone()} alt={loc.name.clone()} loading="lazy" />
                <button id="open-map-btn" type="button" class="location__open" onclick={open_map}>
                    { p.open_map_label.clone() }
                </button>
            </div>
        </section>
    }
}

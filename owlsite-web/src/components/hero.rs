use owlsite_core::text::split_line_breaks;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub cover: AttrValue,
    pub presents: AttrValue,
    /// Raw title; `<br>` markers become real line breaks.
    pub title: AttrValue,
    pub subtitle: AttrValue,
}

#[function_component(Hero)]
pub fn hero(p: &Props) -> Html {
    let lines = split_line_breaks(&p.title);
    let last = lines.len().saturating_sub(1);
    html! {
        <section class="hero">
            <img class="hero__cover" src={p.cover.clone()} alt="" />
            <div class="hero__text">
                if !p.presents.is_empty() {
                    <p class="hero__presents">{ p.presents.clone() }</p>
                }
                <h1 id="event-title" class="hero__title">
                    { for lines.iter().enumerate().map(|(idx, line)| html! {
                        <>
                            { (*line).to_string() }
                            if idx < last { <br /> }
                        </>
                    }) }
                </h1>
                <h2 id="event-subtitle" class="hero__subtitle">{ p.subtitle.clone() }</h2>
            </div>
        </section>
    }
}

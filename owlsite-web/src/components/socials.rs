use owlsite_core::Social;
use yew::prelude::*;

/// Phosphor icon class for a social network id.
#[must_use]
pub fn icon_for(id: &str) -> &'static str {
    match id {
        "inst" => "ph-instagram-logo",
        "fb" => "ph-facebook-logo",
        "tg" => "ph-telegram-logo",
        _ => "ph-link",
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub socials: Vec<Social>,
}

#[function_component(Socials)]
pub fn socials(p: &Props) -> Html {
    if p.socials.is_empty() {
        return Html::default();
    }
    html! {
        <nav class="socials" aria-label="social">
            { for p.socials.iter().map(|social| html! {
                <a
                    class="socials__link"
                    href={social.url.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label={social.id.clone()}
                >
                    <i class={classes!("ph-bold", icon_for(&social.id))} aria-hidden="true"></i>
                </a>
            }) }
        </nav>
    }
}

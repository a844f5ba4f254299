pub mod event;
pub mod menu;
pub mod not_found;

use yew::prelude::*;

/// Shell shown until the first pack and manifest have loaded, or forever if that failed.
#[must_use]
pub fn pending() -> Html {
    html! { <main id="main" class="page page--pending" aria-busy="true"></main> }
}

use crate::dom::{console_error, fetch_text};
use crate::paths::{manifest_url, pack_url};
use futures::future::try_join;
use owlsite_core::{Lang, LanguagePack, ResourcePaths, SiteAction, SwitchTicket, load_store};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Fetch the pack for `lang` together with the image manifest.
///
/// Both documents must arrive and parse; otherwise the page stays unrendered.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn load_initial(lang: Lang) -> SiteAction {
    let paths = ResourcePaths::default();
    let fetched = try_join(fetch_text(&pack_url(lang)), fetch_text(&manifest_url())).await;
    match fetched.and_then(|(pack, manifest)| load_store(lang, &pack, &manifest, &paths)) {
        Ok(store) => {
            log::info!("loaded {lang} pack");
            SiteAction::Loaded(store)
        }
        Err(err) => {
            console_error(&format!("Failed to load site data: {err}"));
            SiteAction::LoadFailed(err.to_string())
        }
    }
}

/// Fetch only the pack for a language switch; the manifest is kept.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn load_switch(ticket: SwitchTicket) -> SiteAction {
    let resource = ResourcePaths::default().pack(ticket.lang);
    let loaded = fetch_text(&pack_url(ticket.lang))
        .await
        .and_then(|json| LanguagePack::from_json(&resource, &json));
    match loaded {
        Ok(pack) => SiteAction::PackArrived(ticket, pack),
        Err(err) => {
            console_error(&format!("Failed to switch language: {err}"));
            SiteAction::SwitchFailed(ticket, err.to_string())
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(state: &super::state::AppStateHandle) {
    let dispatcher = state.dispatcher();
    use_effect_with((), move |()| {
        let lang = crate::locale::saved_lang();
        wasm_bindgen_futures::spawn_local(async move {
            dispatcher.dispatch(load_initial(lang).await);
        });
        || {}
    });
}

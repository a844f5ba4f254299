//! Persisted language preference.
use owlsite_core::{LANG_STORAGE_KEY, Lang};

/// Language stored from a previous visit, English when nothing usable is saved.
#[must_use]
pub fn saved_lang() -> Lang {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        let saved = crate::dom::local_storage()
            .and_then(|storage| storage.get_item(LANG_STORAGE_KEY).ok().flatten());
        Lang::resolve_saved(saved.as_deref())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        Lang::default()
    }
}

/// Remember `lang` for future visits and reflect it on `<html lang>`.
pub fn persist_lang(lang: Lang) {
    apply_document_lang(lang);
    if let Some(storage) = crate::dom::local_storage()
        && storage.set_item(LANG_STORAGE_KEY, lang.code()).is_err()
    {
        log::warn!("could not persist language preference");
    }
}

/// Set the `lang` attribute on the root element.
pub fn apply_document_lang(lang: Lang) {
    if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
        let _ = el.set_attribute("lang", lang.code());
    }
}

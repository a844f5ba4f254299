use owlsite_core::{
    ItemType, Lang, ResourcePaths, distinct_categories, load_store, translate_category,
};

const MANIFEST: &str = include_str!("../static/data/images.json");

fn pack_json(lang: Lang) -> &'static str {
    match lang {
        Lang::En => include_str!("../static/data/en.json"),
        Lang::Ru => include_str!("../static/data/ru.json"),
        Lang::Ka => include_str!("../static/data/ka.json"),
    }
}

#[test]
fn shipped_packs_load_for_every_language() {
    for lang in Lang::ALL {
        let store = load_store(lang, pack_json(lang), MANIFEST, &ResourcePaths::default())
            .unwrap_or_else(|err| panic!("{lang}: {err}"));
        assert!(!store.pack().menu.items.is_empty());
        assert_ne!(store.label("pageTitle"), "pageTitle");
    }
}

#[test]
fn shipped_categories_are_translated_everywhere() {
    for lang in Lang::ALL {
        let store = load_store(lang, pack_json(lang), MANIFEST, &ResourcePaths::default())
            .expect("store");
        let pack = store.pack();
        for kind in [ItemType::Bar, ItemType::Food] {
            for category in distinct_categories(&pack.menu.items, kind) {
                let shown = translate_category(&pack.ui.category_translations, &category, lang);
                assert!(
                    pack.ui.category_translations.contains_key(&category),
                    "{category} missing from {lang} translations"
                );
                assert!(!shown.is_empty());
            }
        }
    }
}

use crate::app::handlers::AppHandlers;
use crate::components::category_grid::{CategoryGrid, CategoryTile};
use crate::components::header::Header;
use crate::components::item_list::ItemList;
use crate::components::item_modal::ItemModal;
use crate::components::popular::PopularStrip;
use crate::components::type_toggle::TypeToggle;
use crate::router::Route;
use owlsite_core::{
    ItemCard, ItemType, LocalizedStore, NavAction, NavigatorState, SiteState, item_cards,
    popular_items, translate_category,
};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub site: Rc<SiteState>,
    pub handlers: AppHandlers,
}

/// Grid tiles for the active type, captions translated for the current language.
#[must_use]
pub fn category_tiles(store: &LocalizedStore, nav: &NavigatorState) -> Vec<CategoryTile> {
    let translations = &store.pack().ui.category_translations;
    nav.categories
        .iter()
        .map(|key| CategoryTile {
            key: key.clone(),
            label: translate_category(translations, key, store.lang()).to_string(),
        })
        .collect()
}

fn modal_card(store: &LocalizedStore, nav: &NavigatorState) -> Option<ItemCard> {
    let id = nav.current_item()?;
    let item = store.pack().item(id)?;
    Some(ItemCard::from_item(item, store.manifest()))
}

#[function_component(MenuPage)]
pub fn menu_page(p: &Props) -> Html {
    let Some(store) = p.site.store.as_ref() else {
        return super::pending();
    };
    let nav = &p.site.nav;
    let pack = store.pack();
    let text = |key: &str, default: &str| AttrValue::from(store.label_or(key, default).to_string());

    let cards = nav
        .active_category
        .as_deref()
        .map(|category| item_cards(&pack.menu.items, category, store.manifest()))
        .unwrap_or_default();
    let popular = popular_items(&pack.menu.items, store.manifest());

    let on_type = p.handlers.nav.reform(NavAction::SelectType);
    let on_category = p.handlers.nav.reform(NavAction::SelectCategory);
    let on_open = p.handlers.nav.reform(NavAction::OpenItem);
    let on_step = p.handlers.nav.reform(NavAction::Step);
    let on_close = p.handlers.nav.reform(|()| NavAction::CloseModal);

    html! {
        <>
            <Header
                lang={store.lang()}
                share_label={text("share", "Share")}
                on_cycle_lang={p.handlers.cycle_lang.clone()}
                on_share={p.handlers.share.clone()}
            />
            <main id="main" class="page page--menu">
                <nav class="menu-nav">
                    <Link<Route> to={Route::Event} classes="menu-nav__back">
                        { text("back", "Back") }
                    </Link<Route>>
                    <h1 class="menu-nav__title">{ text("menu", "Menu") }</h1>
                </nav>
                <TypeToggle
                    active={nav.active_type}
                    bar_label={text(ItemType::Bar.as_str(), "Bar")}
                    food_label={text(ItemType::Food.as_str(), "Food")}
                    on_select={on_type}
                />
                <PopularStrip title={text("popularNow", "Popular now")} cards={popular} on_open={on_open.clone()} />
                <CategoryGrid
                    tiles={category_tiles(store, nav)}
                    active={nav.active_category.clone()}
                    on_select={on_category}
                />
                <ItemList {cards} {on_open} />
            </main>
            <ItemModal
                card={modal_card(store, nav)}
                close_label={text("close", "Close")}
                {on_step}
                {on_close}
            />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use owlsite_core::{ImageManifest, Lang, LanguagePack, SiteAction};

    fn site(lang: Lang) -> SiteState {
        let pack = LanguagePack::from_json(
            "ru.json",
            r#"{
                "ui": { "categoryTranslations": { "COCKTAILS": { "ru": "Коктейли" } } },
                "menu": { "items": [
                    { "name": "Mojito", "category": "COCKTAILS", "type": "bar", "price": 18 },
                    { "name": "Lager", "category": "BEER", "type": "bar", "price": 9 }
                ] }
            }"#,
        )
        .expect("pack");
        let mut site = SiteState::default();
        site.apply(SiteAction::Loaded(LocalizedStore::new(
            lang,
            pack,
            ImageManifest::default(),
        )));
        site
    }

    #[test]
    fn tiles_fall_back_to_raw_category() {
        let site = site(Lang::Ru);
        let store = site.store.as_ref().expect("store");
        let tiles = category_tiles(store, &site.nav);
        let labels: Vec<&str> = tiles.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Коктейли", "BEER"]);
    }

    #[test]
    fn modal_card_follows_navigator() {
        let mut site = site(Lang::En);
        {
            let store = site.store.as_ref().expect("store");
            assert_eq!(modal_card(store, &site.nav), None);
        }
        site.apply(SiteAction::Nav(NavAction::OpenItem(owlsite_core::ItemId(1))));
        let store = site.store.as_ref().expect("store");
        let card = modal_card(store, &site.nav).expect("card");
        assert_eq!(card.name, "Lager");
    }
}

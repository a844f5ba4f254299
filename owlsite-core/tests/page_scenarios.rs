use owlsite_core::{
    Countdown, CountdownDisplay, CountdownParts, ImageManifest, ItemId, ItemType, Lang,
    LanguagePack, LoadStatus, LocalizedStore, NavAction, PLACEHOLDER_IMAGE, ResourcePaths,
    SiteAction, SiteState, Step, SwipeOutcome, SwitchSequencer, classify, item_cards, items_for,
    load_store, resolve_image, translate_category,
};

const PACK_EN: &str = r#"{
    "ui": {
        "days": "Days",
        "categoryTranslations": {
            "COCKTAILS": { "en": "Cocktails", "ru": "Коктейли", "ka": "კოქტეილები" },
            "hot dishes": { "ru": "Горячие блюда" }
        }
    },
    "event": { "title": "Owl<br/>Night", "eventDateISO": "2025-01-01T00:00:00Z" },
    "menu": {
        "categories": ["COCKTAILS", "HOT DISHES"],
        "items": [
            { "name": "Mojito", "category": "COCKTAILS", "type": "bar", "price": "18" },
            { "name": "Burger", "category": "HOT DISHES", "type": "food", "price": "25" }
        ]
    }
}"#;

const PACK_RU: &str = r#"{
    "ui": { "days": "Дней" },
    "menu": {
        "items": [
            { "name": "Мохито", "category": "COCKTAILS", "type": "bar", "price": "18" },
            { "name": "Бургер", "category": "HOT DISHES", "type": "food", "price": "25" }
        ]
    }
}"#;

const MANIFEST: &str = r#"{ "images": { "menu": { "old_fashioned": "img/menu/old_fashioned.webp" } } }"#;

fn loaded_site() -> SiteState {
    let store = load_store(Lang::En, PACK_EN, MANIFEST, &ResourcePaths::default()).expect("store");
    let mut site = SiteState::default();
    site.apply(SiteAction::Loaded(store));
    site
}

fn bar_item(name: &str, category: &str) -> String {
    format!(r#"{{ "name": "{name}", "category": "{category}", "type": "bar", "price": "10" }}"#)
}

#[test]
fn scenario_a_type_switch_rebuilds_grid() {
    let mut site = loaded_site();
    assert_eq!(site.status, LoadStatus::Ready);
    assert_eq!(site.nav.active_type, ItemType::Bar);
    assert_eq!(site.nav.categories, vec!["COCKTAILS"]);
    assert_eq!(site.nav.active_category.as_deref(), Some("COCKTAILS"));

    let repaint = site.apply(SiteAction::Nav(NavAction::SelectType(ItemType::Food)));
    assert!(repaint.grid && repaint.items && repaint.toggle);
    assert_eq!(site.nav.categories, vec!["HOT DISHES"]);
    assert_eq!(site.nav.active_category.as_deref(), Some("HOT DISHES"));

    let repeat = site.apply(SiteAction::Nav(NavAction::SelectType(ItemType::Food)));
    assert!(!repeat.any(), "selecting the active type is a no-op");
}

#[test]
fn scenario_b_one_hour_remaining() {
    let target = Countdown::from_iso("2025-01-01T00:00:00Z").expect("target");
    let now = Countdown::from_iso("2024-12-31T23:00:00Z").expect("now").target_ms();
    match target.tick(now) {
        CountdownDisplay::Remaining(parts) => assert_eq!(parts.to_string(), "00:01:00:00"),
        CountdownDisplay::Started => panic!("event has not started yet"),
    }
}

#[test]
fn scenario_c_past_target_stays_started() {
    let target = Countdown::from_iso("2020-06-01T18:00:00Z").expect("target");
    let now = Countdown::from_iso("2024-12-31T23:00:00Z").expect("now").target_ms();
    for tick in 0..5 {
        let display = target.tick(now + tick * 1_000);
        assert_eq!(display, CountdownDisplay::Started);
        assert!(display.is_terminal());
    }
}

#[test]
fn scenario_d_image_lookup_and_placeholder() {
    let pack = LanguagePack::from_json(
        "en.json",
        &format!(
            r#"{{ "menu": {{ "items": [{}, {}] }} }}"#,
            bar_item("Old Fashioned", "CLASSICS"),
            bar_item("Sazerac", "CLASSICS")
        ),
    )
    .expect("pack");
    let manifest = ImageManifest::from_json("images.json", MANIFEST).expect("manifest");
    assert_eq!(
        resolve_image(&manifest, &pack.menu.items[0]),
        "img/menu/old_fashioned.webp"
    );
    assert_eq!(resolve_image(&manifest, &pack.menu.items[1]), PLACEHOLDER_IMAGE);
}

#[test]
fn translation_is_never_empty_for_known_categories() {
    let pack = LanguagePack::from_json("en.json", PACK_EN).expect("pack");
    for lang in Lang::ALL {
        for category in ["COCKTAILS", "HOT DISHES", "hot dishes", "UNKNOWN"] {
            let text = translate_category(&pack.ui.category_translations, category, lang);
            assert!(!text.is_empty(), "{category} in {lang}");
        }
    }
    assert_eq!(
        translate_category(&pack.ui.category_translations, "hot dishes", Lang::Ru),
        "Горячие блюда"
    );
}

#[test]
fn decomposition_bounds_hold_across_range() {
    let samples = (0..2_000_u64)
        .map(|i| i * 7_919_113)
        .chain([0, 999, 1_000, 59_999, 3_599_999, 86_399_999, 86_400_000, u64::from(u32::MAX)]);
    for remaining in samples {
        let parts = CountdownParts::decompose(remaining);
        let whole = parts.whole_ms();
        assert!(whole <= remaining && remaining < whole + 1_000, "{remaining}");
        assert!(parts.hours <= 23);
        assert!(parts.minutes <= 59);
        assert!(parts.seconds <= 59);
    }
}

#[test]
fn item_list_is_idempotent() {
    let pack = LanguagePack::from_json(
        "en.json",
        &format!(
            r#"{{ "menu": {{ "items": [{}, {}, {}] }} }}"#,
            bar_item("Gimlet", "CLASSICS"),
            bar_item("Old Fashioned", "CLASSICS"),
            bar_item("Martini", "CLASSICS")
        ),
    )
    .expect("pack");
    let manifest = ImageManifest::from_json("images.json", MANIFEST).expect("manifest");
    let first = item_cards(&pack.menu.items, "CLASSICS", &manifest);
    let second = item_cards(&pack.menu.items, "CLASSICS", &manifest);
    assert_eq!(first, second);
    let names: Vec<&str> = items_for(&pack.menu.items, "CLASSICS", &manifest)
        .iter()
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(names, vec!["Old Fashioned", "Gimlet", "Martini"]);
}

#[test]
fn modal_navigation_wraps_within_category() {
    let pack = LanguagePack::from_json(
        "en.json",
        &format!(
            r#"{{ "menu": {{ "items": [{}, {}, {}, {}] }} }}"#,
            bar_item("Lager", "BEER"),
            bar_item("Stout", "BEER"),
            bar_item("Mojito", "COCKTAILS"),
            bar_item("Porter", "BEER")
        ),
    )
    .expect("pack");
    let store = LocalizedStore::new(Lang::En, pack, ImageManifest::default());
    let mut site = SiteState::default();
    site.apply(SiteAction::Loaded(store));

    site.apply(SiteAction::Nav(NavAction::OpenItem(ItemId(0))));
    assert_eq!(site.nav.current_item(), Some(ItemId(0)));
    site.apply(SiteAction::Nav(NavAction::Step(Step::Previous)));
    assert_eq!(site.nav.current_item(), Some(ItemId(3)), "N-1 after previous from 0");
    site.apply(SiteAction::Nav(NavAction::Step(Step::Next)));
    assert_eq!(site.nav.current_item(), Some(ItemId(0)), "0 after next from N-1");

    site.apply(SiteAction::Nav(NavAction::CloseModal));
    assert_eq!(site.nav.current_item(), None);
}

#[test]
fn swipe_threshold_boundary() {
    assert_eq!(classify(0.0, 100.0), SwipeOutcome::SnapBack);
    assert_eq!(classify(0.0, 101.0), SwipeOutcome::Dismiss);
    assert_eq!(classify(-101.0, 0.0), SwipeOutcome::Next);
    assert_eq!(classify(101.0, 0.0), SwipeOutcome::Previous);
}

#[test]
fn stale_language_pack_is_discarded() {
    let mut site = loaded_site();
    let mut sequencer = SwitchSequencer::default();
    let to_ru = sequencer.issue(Lang::Ru);
    site.apply(SiteAction::SwitchIssued(to_ru));
    let to_ka = sequencer.issue(Lang::Ka);
    site.apply(SiteAction::SwitchIssued(to_ka));
    assert_eq!(site.requested_lang(), Some(Lang::Ka));

    let ka_pack = LanguagePack::from_json("ka.json", PACK_EN).expect("ka");
    let ru_pack = LanguagePack::from_json("ru.json", PACK_RU).expect("ru");

    let applied = site.apply(SiteAction::PackArrived(to_ka, ka_pack));
    assert!(applied.any());
    assert_eq!(site.lang(), Some(Lang::Ka));

    let stale = site.apply(SiteAction::PackArrived(to_ru, ru_pack));
    assert!(!stale.any());
    assert_eq!(site.lang(), Some(Lang::Ka));
}

#[test]
fn language_switch_keeps_category_and_open_item() {
    let mut site = loaded_site();
    site.apply(SiteAction::Nav(NavAction::OpenItem(ItemId(0))));

    let mut sequencer = SwitchSequencer::default();
    let ticket = sequencer.issue(Lang::Ru);
    site.apply(SiteAction::SwitchIssued(ticket));
    let pack = LanguagePack::from_json("ru.json", PACK_RU).expect("ru");
    site.apply(SiteAction::PackArrived(ticket, pack));

    let store = site.store.as_ref().expect("store");
    assert_eq!(store.label("days"), "Дней");
    assert_eq!(site.nav.active_category.as_deref(), Some("COCKTAILS"));
    let current = site.nav.current_item().expect("modal stays open");
    assert_eq!(store.pack().item(current).map(|i| i.name.as_str()), Some("Мохито"));
}

#[test]
fn failed_initial_load_leaves_page_unrendered() {
    let err = load_store(Lang::En, PACK_EN, "not json", &ResourcePaths::default()).unwrap_err();
    assert!(err.to_string().contains("data/images.json"));

    let mut site = SiteState::default();
    site.apply(SiteAction::LoadFailed(err.to_string()));
    assert!(matches!(site.status, LoadStatus::Failed(_)));
    assert!(site.store.is_none());

    let ignored = site.apply(SiteAction::Nav(NavAction::SelectType(ItemType::Food)));
    assert!(!ignored.any());
}

#[test]
fn failed_switch_cycles_from_displayed_language() {
    let mut site = loaded_site();
    let mut sequencer = SwitchSequencer::default();
    let to_ru = sequencer.issue(Lang::Ru);
    site.apply(SiteAction::SwitchIssued(to_ru));
    site.apply(SiteAction::SwitchFailed(to_ru, "offline".into()));

    assert_eq!(site.lang(), Some(Lang::En));
    assert_eq!(site.requested_lang(), Some(Lang::En));
    assert_eq!(site.requested_lang().map(Lang::next), Some(Lang::Ru));
}

#[test]
fn failure_of_superseded_switch_keeps_latest_request() {
    let mut site = loaded_site();
    let mut sequencer = SwitchSequencer::default();
    let to_ru = sequencer.issue(Lang::Ru);
    site.apply(SiteAction::SwitchIssued(to_ru));
    let to_ka = sequencer.issue(Lang::Ka);
    site.apply(SiteAction::SwitchIssued(to_ka));

    site.apply(SiteAction::SwitchFailed(to_ru, "offline".into()));
    assert_eq!(site.requested_lang(), Some(Lang::Ka));
}

fn bar_menu_site() -> SiteState {
    let pack = LanguagePack::from_json(
        "en.json",
        &format!(
            r#"{{ "menu": {{ "items": [{}, {}, {}, {}] }} }}"#,
            bar_item("Mojito", "COCKTAILS"),
            bar_item("Saperavi", "WINE"),
            bar_item("Lager", "BEER"),
            bar_item("Rkatsiteli", "WINE")
        ),
    )
    .expect("pack");
    let mut site = SiteState::default();
    site.apply(SiteAction::Loaded(LocalizedStore::new(
        Lang::En,
        pack,
        ImageManifest::default(),
    )));
    site
}

fn active_item_names(site: &SiteState) -> Vec<String> {
    let store = site.store.as_ref().expect("store");
    let category = site.nav.active_category.as_deref().expect("active category");
    items_for(&store.pack().menu.items, category, store.manifest())
        .iter()
        .map(|item| item.name.clone())
        .collect()
}

#[test]
fn select_category_moves_highlight_and_item_list() {
    let mut site = bar_menu_site();
    assert_eq!(site.nav.categories, vec!["COCKTAILS", "WINE", "BEER"]);
    assert_eq!(active_item_names(&site), vec!["Mojito"]);

    let repaint = site.apply(SiteAction::Nav(NavAction::SelectCategory("WINE".into())));
    assert!(repaint.grid && repaint.items);
    assert!(!repaint.toggle && !repaint.modal);
    assert_eq!(site.nav.active_category.as_deref(), Some("WINE"));
    assert_eq!(active_item_names(&site), vec!["Saperavi", "Rkatsiteli"]);
}

#[test]
fn unknown_category_is_ignored() {
    let mut site = bar_menu_site();
    site.apply(SiteAction::Nav(NavAction::SelectCategory("BEER".into())));

    for unknown in ["SPIRITS", "beer", "HOT DISHES"] {
        let repaint = site.apply(SiteAction::Nav(NavAction::SelectCategory(unknown.into())));
        assert!(!repaint.any(), "{unknown}");
        assert_eq!(site.nav.active_category.as_deref(), Some("BEER"));
    }
}

#[test]
fn menu_without_bar_items_starts_with_no_category() {
    let pack = LanguagePack::from_json(
        "en.json",
        r#"{ "menu": { "items": [
            { "name": "Burger", "category": "HOT DISHES", "type": "food", "price": "25" }
        ] } }"#,
    )
    .expect("pack");
    let mut site = SiteState::default();
    site.apply(SiteAction::Loaded(LocalizedStore::new(
        Lang::En,
        pack,
        ImageManifest::default(),
    )));
    assert_eq!(site.nav.active_type, ItemType::Bar);
    assert!(site.nav.categories.is_empty());
    assert_eq!(site.nav.active_category, None);

    site.apply(SiteAction::Nav(NavAction::SelectType(ItemType::Food)));
    assert_eq!(site.nav.active_category.as_deref(), Some("HOT DISHES"));
}

#[test]
fn language_switch_reopens_same_item_when_packs_are_ordered_differently() {
    let mut site = loaded_site();
    site.apply(SiteAction::Nav(NavAction::SelectType(ItemType::Food)));
    site.apply(SiteAction::Nav(NavAction::OpenItem(ItemId(1))));

    let reordered = r#"{ "menu": { "items": [
        { "name": "Бургер", "category": "HOT DISHES", "type": "food", "price": "25" },
        { "name": "Мохито", "category": "COCKTAILS", "type": "bar", "price": "18" }
    ] } }"#;
    let mut sequencer = SwitchSequencer::default();
    let ticket = sequencer.issue(Lang::Ru);
    site.apply(SiteAction::SwitchIssued(ticket));
    site.apply(SiteAction::PackArrived(
        ticket,
        LanguagePack::from_json("ru.json", reordered).expect("ru"),
    ));

    let store = site.store.as_ref().expect("store");
    let current = site.nav.current_item().expect("modal stays open");
    assert_eq!(store.pack().item(current).map(|i| i.name.as_str()), Some("Бургер"));
}

#[test]
fn language_switch_closes_modal_when_item_is_missing() {
    let mut site = loaded_site();
    site.apply(SiteAction::Nav(NavAction::OpenItem(ItemId(0))));

    let mut sequencer = SwitchSequencer::default();
    let ticket = sequencer.issue(Lang::Ka);
    site.apply(SiteAction::SwitchIssued(ticket));
    let no_cocktails = r#"{ "menu": { "items": [
        { "name": "ბურგერი", "category": "HOT DISHES", "type": "food", "price": "25" }
    ] } }"#;
    site.apply(SiteAction::PackArrived(
        ticket,
        LanguagePack::from_json("ka.json", no_cocktails).expect("ka"),
    ));
    assert_eq!(site.nav.current_item(), None);
    assert_eq!(site.nav.active_category, None);
}

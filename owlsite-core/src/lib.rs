//! Owl Site core
//!
//! Platform-agnostic logic for the event and menu pages: the language pack
//! model, category index, item renderer, navigator, countdown and swipe
//! classification. Nothing here touches the DOM.

pub mod category;
pub mod countdown;
pub mod error;
pub mod gesture;
pub mod images;
pub mod items;
pub mod lang;
pub mod navigator;
pub mod pack;
pub mod share;
pub mod site;
pub mod store;
pub mod text;

pub use category::{distinct_categories, translate_category};
pub use countdown::{Countdown, CountdownDisplay, CountdownError, CountdownParts};
pub use error::LoadError;
pub use gesture::{SWIPE_THRESHOLD_PX, SwipeOutcome, SwipeTracker, classify};
pub use images::{ImageManifest, PLACEHOLDER_IMAGE, normalize_name};
pub use items::{ItemCard, item_cards, items_for, popular_items, resolve_image};
pub use lang::{LANG_STORAGE_KEY, Lang};
pub use navigator::{ModalAnchor, ModalState, NavAction, NavigatorState, Repaint, Step};
pub use pack::{
    CategoryTranslations, EventInfo, ItemId, ItemType, LanguagePack, Location, Menu, MenuItem,
    Participant, Social, UiStrings,
};
pub use share::{AnalyticsEvent, AnalyticsSink, NoopSink, SharePayload};
pub use site::{LoadStatus, SiteAction, SiteState};
pub use store::{LocalizedStore, ResourcePaths, SwitchSequencer, SwitchTicket};

/// Build a store from the two raw documents fetched for the initial render.
///
/// # Errors
///
/// Returns the first [`LoadError`] encountered; both documents must parse.
pub fn load_store(
    lang: Lang,
    pack_json: &str,
    manifest_json: &str,
    paths: &ResourcePaths,
) -> Result<LocalizedStore, LoadError> {
    let pack = LanguagePack::from_json(&paths.pack(lang), pack_json)?;
    let manifest = ImageManifest::from_json(&paths.manifest(), manifest_json)?;
    Ok(LocalizedStore::new(lang, pack, manifest))
}

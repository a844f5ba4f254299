//! Language pack data model.
//!
//! One pack is the full localized configuration document for a single
//! language. Packs are replaced wholesale on a language switch.
use crate::error::LoadError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::fmt;

/// `categoryTranslations`: canonical category name → language code → text.
pub type CategoryTranslations = BTreeMap<String, BTreeMap<String, String>>;

/// Stable synthetic identifier assigned to a menu item when its pack loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    #[default]
    Bar,
    Food,
}

impl ItemType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Food => "food",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiStrings {
    #[serde(rename = "categoryTranslations", default)]
    pub category_translations: CategoryTranslations,
    /// Every other `ui` entry; only string values are usable as labels.
    #[serde(flatten)]
    pub labels: BTreeMap<String, Value>,
}

impl UiStrings {
    #[must_use]
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventInfo {
    pub presents: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub date: String,
    pub session_type: String,
    pub schedule: String,
    pub price: String,
    #[serde(rename = "eventDateISO")]
    pub event_date_iso: String,
    pub ticket_link: String,
    pub whatsapp_contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    pub name: String,
    pub address: String,
    pub zone: String,
    pub map_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(skip_deserializing)]
    pub id: ItemId,
    pub name: String,
    pub category: String,
    #[serde(rename = "type", default)]
    pub kind: ItemType,
    #[serde(default, deserialize_with = "price_text")]
    pub price: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default, deserialize_with = "tags_or_null")]
    pub tags: SmallVec<[String; 4]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Menu {
    pub categories: Vec<String>,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguagePack {
    #[serde(default)]
    pub ui: UiStrings,
    #[serde(default)]
    pub event: EventInfo,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub socials: Vec<Social>,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub menu: Menu,
}

impl LanguagePack {
    /// Parse a pack and assign item ids by position.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] when the document is not a valid pack.
    pub fn from_json(resource: &str, json: &str) -> Result<Self, LoadError> {
        let mut pack: Self =
            serde_json::from_str(json).map_err(|e| LoadError::json(resource, e))?;
        pack.assign_item_ids();
        Ok(pack)
    }

    fn assign_item_ids(&mut self) {
        for (idx, item) in self.menu.items.iter_mut().enumerate() {
            item.id = ItemId(u32::try_from(idx).unwrap_or(u32::MAX));
        }
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&MenuItem> {
        self.menu
            .items
            .get(id.0 as usize)
            .filter(|item| item.id == id)
    }
}

fn price_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn tags_or_null<'de, D>(deserializer: D) -> Result<SmallVec<[String; 4]>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<SmallVec<[String; 4]>>::deserialize(deserializer)?.unwrap_or_default())
}

//! Merging parsed kitchen items into a raw language pack.
//!
//! Packs are edited as `serde_json::Value` so fields this tool does not know
//! about survive the round trip untouched.
use crate::kitchen::KitchenItem;
use owlsite_core::{ItemType, Lang};
use serde_json::{Map, Value, json};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MergeError {
    #[error("`{0}` is not a JSON object")]
    NotAnObject(&'static str),
    #[error("`{0}` is not a JSON array")]
    NotAnArray(&'static str),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub added: usize,
    pub skipped: usize,
    pub new_categories: Vec<String>,
}

/// Canonical category key: the English name upper-cased.
#[must_use]
pub fn canonical_category(english: &str) -> String {
    english.trim().to_uppercase()
}

fn object<'a>(value: &'a mut Value, name: &'static str) -> Result<&'a mut Map<String, Value>, MergeError> {
    value.as_object_mut().ok_or(MergeError::NotAnObject(name))
}

fn child<'a>(
    parent: &'a mut Value,
    parent_name: &'static str,
    key: &'static str,
    empty: Value,
) -> Result<&'a mut Value, MergeError> {
    Ok(object(parent, parent_name)?.entry(key).or_insert(empty))
}

fn array<'a>(value: &'a mut Value, name: &'static str) -> Result<&'a mut Vec<Value>, MergeError> {
    value.as_array_mut().ok_or(MergeError::NotAnArray(name))
}

fn append_items(
    pack: &mut Value,
    lang: Lang,
    items: &[KitchenItem],
    summary: &mut MergeSummary,
) -> Result<(), MergeError> {
    let menu = child(pack, "pack", "menu", json!({}))?;
    let list = array(child(menu, "menu", "items", json!([]))?, "menu.items")?;
    for item in items {
        let category = canonical_category(&item.category.en);
        let name = item.name.get(lang);
        let exists = list.iter().any(|existing| {
            existing.get("category").and_then(Value::as_str) == Some(category.as_str())
                && existing.get("name").and_then(Value::as_str) == Some(name)
        });
        if exists {
            summary.skipped += 1;
            continue;
        }
        list.push(json!({
            "name": name,
            "category": category,
            "type": ItemType::Food.as_str(),
            "price": item.price,
            "desc": null,
        }));
        summary.added += 1;
    }
    Ok(())
}

fn merge_categories(
    pack: &mut Value,
    items: &[KitchenItem],
    summary: &mut MergeSummary,
) -> Result<(), MergeError> {
    let menu = child(pack, "pack", "menu", json!({}))?;
    let categories = array(child(menu, "menu", "categories", json!([]))?, "menu.categories")?;
    let mut sorted: BTreeSet<String> = categories
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();
    for item in items {
        let category = canonical_category(&item.category.en);
        if sorted.insert(category.clone()) {
            summary.new_categories.push(category);
        }
    }
    *categories = sorted.into_iter().map(Value::String).collect();
    Ok(())
}

fn merge_translations(pack: &mut Value, items: &[KitchenItem]) -> Result<(), MergeError> {
    let ui = child(pack, "pack", "ui", json!({}))?;
    let translations = object(
        child(ui, "ui", "categoryTranslations", json!({}))?,
        "ui.categoryTranslations",
    )?;
    for item in items {
        let entry = translations
            .entry(canonical_category(&item.category.en))
            .or_insert_with(|| json!({}));
        let entry = object(entry, "ui.categoryTranslations entry")?;
        for lang in Lang::ALL {
            entry
                .entry(lang.code())
                .or_insert_with(|| Value::String(item.category.get(lang).to_string()));
        }
    }
    Ok(())
}

/// Add `items` to the pack for `lang` as kitchen (`food`) entries.
///
/// Items already present with the same category and localized name are skipped.
/// Existing category translations are never overwritten.
///
/// # Errors
/// Returns [`MergeError`] when the pack has an unexpected shape.
pub fn merge_into_pack(
    pack: &mut Value,
    lang: Lang,
    items: &[KitchenItem],
) -> Result<MergeSummary, MergeError> {
    let mut summary = MergeSummary::default();
    append_items(pack, lang, items, &mut summary)?;
    merge_categories(pack, items, &mut summary)?;
    merge_translations(pack, items)?;
    Ok(summary)
}

//! Category index: derived category lists and their display names.
use crate::lang::Lang;
use crate::pack::{CategoryTranslations, ItemType, MenuItem};

/// Distinct categories of `kind`, in the order they first appear.
#[must_use]
pub fn distinct_categories(items: &[MenuItem], kind: ItemType) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items.iter().filter(|item| item.kind == kind) {
        if !seen.iter().any(|c| *c == item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}

/// Display name of `category` in `lang`.
///
/// Tries the exact key, then the upper-cased key. Falls back to the raw
/// category when there is no usable translation.
#[must_use]
pub fn translate_category<'a>(
    translations: &'a CategoryTranslations,
    category: &'a str,
    lang: Lang,
) -> &'a str {
    translations
        .get(category)
        .or_else(|| translations.get(&category.to_uppercase()))
        .and_then(|entry| entry.get(lang.code()))
        .map(String::as_str)
        .filter(|text| !text.trim().is_empty())
        .unwrap_or(category)
}

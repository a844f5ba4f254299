//! Item renderer: projects menu items into display records.
use crate::images::{ImageManifest, PLACEHOLDER_IMAGE};
use crate::pack::{ItemId, MenuItem};
use crate::text::strip_line_breaks;

/// Everything a list row, popular tile or detail sheet needs to draw one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub id: ItemId,
    pub name: String,
    pub price: String,
    pub desc: String,
    pub image: String,
    pub has_image: bool,
    pub tags: Vec<String>,
    pub popular: bool,
}

impl ItemCard {
    #[must_use]
    pub fn from_item(item: &MenuItem, manifest: &ImageManifest) -> Self {
        Self {
            id: item.id,
            name: strip_line_breaks(&item.name),
            price: item.price.clone(),
            desc: item.desc.clone().unwrap_or_default(),
            image: resolve_image(manifest, item).to_string(),
            has_image: !is_placeholder(manifest, item),
            tags: item.tags.to_vec(),
            popular: item.popular,
        }
    }
}

/// Image URL for `item`, or the placeholder when the manifest has none.
#[must_use]
pub fn resolve_image<'a>(manifest: &'a ImageManifest, item: &MenuItem) -> &'a str {
    manifest.menu_image(&item.name)
}

fn is_placeholder(manifest: &ImageManifest, item: &MenuItem) -> bool {
    resolve_image(manifest, item) == PLACEHOLDER_IMAGE
}

/// Items of `category`, pictured items first, original order otherwise kept.
#[must_use]
pub fn items_for<'a>(
    items: &'a [MenuItem],
    category: &str,
    manifest: &ImageManifest,
) -> Vec<&'a MenuItem> {
    let mut selected: Vec<&MenuItem> = items
        .iter()
        .filter(|item| item.category == category)
        .collect();
    // sort_by_key is stable, so each group keeps pack order
    selected.sort_by_key(|item| is_placeholder(manifest, item));
    selected
}

#[must_use]
pub fn item_cards(items: &[MenuItem], category: &str, manifest: &ImageManifest) -> Vec<ItemCard> {
    items_for(items, category, manifest)
        .into_iter()
        .map(|item| ItemCard::from_item(item, manifest))
        .collect()
}

/// Items flagged `popular`, in pack order.
#[must_use]
pub fn popular_items(items: &[MenuItem], manifest: &ImageManifest) -> Vec<ItemCard> {
    items
        .iter()
        .filter(|item| item.popular)
        .map(|item| ItemCard::from_item(item, manifest))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::ItemType;
    use std::collections::HashMap;

    fn item(id: u32, name: &str, category: &str) -> MenuItem {
        MenuItem {
            id: ItemId(id),
            name: name.to_string(),
            category: category.to_string(),
            kind: ItemType::Bar,
            price: "10".to_string(),
            desc: None,
            popular: id % 2 == 0,
            tags: Default::default(),
        }
    }

    fn manifest() -> ImageManifest {
        ImageManifest {
            menu: HashMap::from([
                ("negroni".to_string(), "img/negroni.webp".to_string()),
                ("old_fashioned".to_string(), "img/of.webp".to_string()),
            ]),
            ..ImageManifest::default()
        }
    }

    #[test]
    fn pictured_items_sort_first_and_stay_stable() {
        let items = vec![
            item(0, "Mojito", "COCKTAILS"),
            item(1, "Negroni", "COCKTAILS"),
            item(2, "Lager", "BEER"),
            item(3, "Daiquiri", "COCKTAILS"),
            item(4, "Old Fashioned", "COCKTAILS"),
        ];
        let names: Vec<&str> = items_for(&items, "COCKTAILS", &manifest())
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["Negroni", "Old Fashioned", "Mojito", "Daiquiri"]);
    }

    #[test]
    fn category_match_is_exact() {
        let items = vec![item(0, "Mojito", "COCKTAILS"), item(1, "Sour", "Cocktails")];
        assert_eq!(items_for(&items, "COCKTAILS", &manifest()).len(), 1);
    }

    #[test]
    fn card_strips_markup_and_fills_defaults() {
        let mut source = item(0, "Long<br/>Island", "COCKTAILS");
        source.tags.push("strong".to_string());
        let card = ItemCard::from_item(&source, &manifest());
        assert_eq!(card.name, "Long Island");
        assert_eq!(card.desc, "");
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
        assert!(!card.has_image);
        assert_eq!(card.tags, vec!["strong".to_string()]);
    }

    #[test]
    fn popular_items_keep_pack_order() {
        let items = vec![
            item(0, "Mojito", "COCKTAILS"),
            item(1, "Negroni", "COCKTAILS"),
            item(2, "Lager", "BEER"),
        ];
        let ids: Vec<ItemId> = popular_items(&items, &manifest()).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![ItemId(0), ItemId(2)]);
    }
}

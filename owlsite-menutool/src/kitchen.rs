//! Parser for the trilingual kitchen menu handed over by the venue.
//!
//! The file is plain text. Category lines read `ka / en / ru`; item lines read
//! `name_ka / name_en / name_ru — price`. Blank lines and `---` separators are skipped.
use owlsite_core::Lang;
use thiserror::Error;

const PRICE_SEPARATOR: char = '—';

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KitchenParseError {
    #[error("line {line}: item listed before any category")]
    ItemWithoutCategory { line: usize },
    #[error("line {line}: expected three names separated by '/', found {found}")]
    MalformedItem { line: usize, found: usize },
    #[error("line {line}: price contains no digits")]
    MissingPrice { line: usize },
}

/// One text in each supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trilingual {
    pub ka: String,
    pub en: String,
    pub ru: String,
}

impl Trilingual {
    fn split(text: &str) -> Result<Self, usize> {
        let parts: Vec<&str> = text.split('/').map(str::trim).collect();
        match parts.as_slice() {
            [ka, en, ru] => Ok(Self {
                ka: (*ka).to_string(),
                en: (*en).to_string(),
                ru: (*ru).to_string(),
            }),
            _ => Err(parts.len()),
        }
    }

    #[must_use]
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Ru => &self.ru,
            Lang::Ka => &self.ka,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KitchenItem {
    pub category: Trilingual,
    pub name: Trilingual,
    /// Digits and dots only; currency signs and spacing are dropped.
    pub price: String,
}

#[must_use]
pub fn clean_price(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

/// Parse the whole kitchen menu.
///
/// # Errors
/// Returns the first malformed item line. Category-like lines without exactly
/// three parts are skipped with a warning.
pub fn parse_kitchen_menu(text: &str) -> Result<Vec<KitchenItem>, KitchenParseError> {
    let mut items = Vec::new();
    let mut category: Option<Trilingual> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line == "---" {
            continue;
        }

        if let Some((names, price)) = line.split_once(PRICE_SEPARATOR) {
            let name = Trilingual::split(names).map_err(|found| KitchenParseError::MalformedItem {
                line: line_no,
                found,
            })?;
            let current = category
                .clone()
                .ok_or(KitchenParseError::ItemWithoutCategory { line: line_no })?;
            let price = clean_price(price);
            if !price.chars().any(|c| c.is_ascii_digit()) {
                return Err(KitchenParseError::MissingPrice { line: line_no });
            }
            items.push(KitchenItem {
                category: current,
                name,
                price,
            });
        } else if line.contains('/') {
            match Trilingual::split(line) {
                Ok(next) => category = Some(next),
                Err(found) => log::warn!("line {line_no}: skipping category with {found} parts"),
            }
        } else {
            log::debug!("line {line_no}: ignoring {line:?}");
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU: &str = "\
ცხელი კერძები / Hot dishes / Горячие блюда
მწვადი / Mtsvadi / Мцвади — 26 ₾
---

ხემსი / Snacks / Закуски
ფხალი / Pkhali / Пхали — 12.50 GEL
";

    #[test]
    fn parses_categories_and_items() {
        let items = parse_kitchen_menu(MENU).expect("menu");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].category.en, "Hot dishes");
        assert_eq!(items[0].name.get(Lang::Ru), "Мцвади");
        assert_eq!(items[0].price, "26");
        assert_eq!(items[1].category.get(Lang::Ka), "ხემსი");
        assert_eq!(items[1].price, "12.50");
    }

    #[test]
    fn item_before_category_is_rejected() {
        let err = parse_kitchen_menu("a / b / c — 5").unwrap_err();
        assert_eq!(err, KitchenParseError::ItemWithoutCategory { line: 1 });
    }

    #[test]
    fn item_needs_three_names() {
        let err = parse_kitchen_menu("x / y / z\nonly / two — 5").unwrap_err();
        assert_eq!(err, KitchenParseError::MalformedItem { line: 2, found: 2 });
    }

    #[test]
    fn price_without_digits_is_rejected() {
        let err = parse_kitchen_menu("x / y / z\na / b / c — free").unwrap_err();
        assert_eq!(err, KitchenParseError::MissingPrice { line: 2 });
    }
}

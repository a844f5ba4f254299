use crate::kitchen::parse_kitchen_menu;
use crate::merge::{MergeSummary, merge_into_pack};
use anyhow::{Context, Result};
use owlsite_core::Lang;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackUpdate {
    pub lang: Lang,
    pub path: PathBuf,
    pub summary: MergeSummary,
    pub written: bool,
}

/// Merge the kitchen menu at `menu_path` into every pack under `data_dir`.
///
/// With `dry_run` the packs are merged in memory and reported but not written.
///
/// # Errors
/// Fails when the menu cannot be read or parsed, or a pack cannot be read,
/// parsed, merged or written.
pub fn import_menu(menu_path: &Path, data_dir: &Path, dry_run: bool) -> Result<Vec<PackUpdate>> {
    let text = fs::read_to_string(menu_path)
        .with_context(|| format!("reading kitchen menu {}", menu_path.display()))?;
    let items = parse_kitchen_menu(&text)
        .with_context(|| format!("parsing kitchen menu {}", menu_path.display()))?;
    log::info!("parsed {} kitchen items", items.len());

    let mut merged = Vec::with_capacity(Lang::ALL.len());
    for lang in Lang::ALL {
        let path = data_dir.join(format!("{}.json", lang.code()));
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let mut pack: Value =
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
        let summary = merge_into_pack(&mut pack, lang, &items)
            .with_context(|| format!("merging into {}", path.display()))?;
        merged.push((lang, path, pack, summary));
    }

    // Nothing is written until every pack has merged, so the packs never diverge.
    let mut updates = Vec::with_capacity(merged.len());
    for (lang, path, pack, summary) in merged {
        let written = !dry_run && summary.added > 0;
        if written {
            let mut out = serde_json::to_string_pretty(&pack)?;
            out.push('\n');
            fs::write(&path, out).with_context(|| format!("writing {}", path.display()))?;
        }
        updates.push(PackUpdate {
            lang,
            path,
            summary,
            written,
        });
    }
    Ok(updates)
}

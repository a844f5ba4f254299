//! URLs for the fetched data documents and static assets, honouring the deployment base path.
use owlsite_core::{Lang, ResourcePaths};

/// When `PUBLIC_URL` is set at compile time (e.g., `/owl` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, public_url())
}

/// URL of the language pack for `lang`.
#[must_use]
pub fn pack_url(lang: Lang) -> String {
    asset_path(&ResourcePaths::default().pack(lang))
}

/// URL of the image manifest.
#[must_use]
pub fn manifest_url() -> String {
    asset_path(&ResourcePaths::default().manifest())
}

/// Image URLs from the manifest are relative to the site root; absolute ones pass through.
#[must_use]
pub fn image_url(src: &str) -> String {
    if src.starts_with("http://") || src.starts_with("https://") || src.starts_with("data:") {
        src.to_string()
    } else {
        asset_path(src)
    }
}

/// Base path for the router (e.g., `/owl` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(public_url())
}

fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

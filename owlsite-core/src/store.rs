//! Localized data store: the active language pack plus the image manifest.
use crate::images::ImageManifest;
use crate::lang::Lang;
use crate::pack::LanguagePack;

/// Where the two documents live relative to the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    pub data_dir: &'static str,
    pub manifest_file: &'static str,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            data_dir: "data",
            manifest_file: "images.json",
        }
    }
}

impl ResourcePaths {
    #[must_use]
    pub fn pack(&self, lang: Lang) -> String {
        format!("{}/{}.json", self.data_dir, lang.code())
    }

    #[must_use]
    pub fn manifest(&self) -> String {
        format!("{}/{}", self.data_dir, self.manifest_file)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedStore {
    lang: Lang,
    pack: LanguagePack,
    manifest: ImageManifest,
}

impl LocalizedStore {
    #[must_use]
    pub const fn new(lang: Lang, pack: LanguagePack, manifest: ImageManifest) -> Self {
        Self {
            lang,
            pack,
            manifest,
        }
    }

    #[must_use]
    pub const fn lang(&self) -> Lang {
        self.lang
    }

    #[must_use]
    pub const fn pack(&self) -> &LanguagePack {
        &self.pack
    }

    #[must_use]
    pub const fn manifest(&self) -> &ImageManifest {
        &self.manifest
    }

    /// `ui` label for `key`; the key itself when the pack lacks it.
    #[must_use]
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.pack.ui.label(key).unwrap_or(key)
    }

    #[must_use]
    pub fn label_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.pack
            .ui
            .label(key)
            .filter(|text| !text.is_empty())
            .unwrap_or(default)
    }

    /// Swap in a freshly loaded pack. The manifest is language independent and kept.
    pub fn replace_pack(&mut self, lang: Lang, pack: LanguagePack) {
        self.lang = lang;
        self.pack = pack;
    }
}

/// Tag attached to one language-switch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchTicket {
    pub seq: u64,
    pub lang: Lang,
}

/// Issues monotonically increasing switch tickets.
#[derive(Debug, Default)]
pub struct SwitchSequencer {
    last: u64,
}

impl SwitchSequencer {
    pub fn issue(&mut self, lang: Lang) -> SwitchTicket {
        self.last += 1;
        SwitchTicket {
            seq: self.last,
            lang,
        }
    }
}

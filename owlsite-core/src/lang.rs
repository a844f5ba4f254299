//! Supported site languages and the persisted preference key.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// localStorage key holding the visitor's language choice.
pub const LANG_STORAGE_KEY: &str = "lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ru,
    Ka,
}

impl Lang {
    pub const ALL: [Self; 3] = [Self::En, Self::Ru, Self::Ka];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Ka => "ka",
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ru => "Русский",
            Self::Ka => "ქართული",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Next language in the cycle used by the single language button.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::En => Self::Ru,
            Self::Ru => Self::Ka,
            Self::Ka => Self::En,
        }
    }

    /// Resolve a stored preference; anything unknown falls back to English.
    #[must_use]
    pub fn resolve_saved(saved: Option<&str>) -> Self {
        saved.and_then(Self::from_code).unwrap_or_default()
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code: {0}")]
pub struct UnknownLang(pub String);

impl FromStr for Lang {
    type Err = UnknownLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLang(s.to_string()))
    }
}

//! Language-independent image manifest.
use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Shown whenever a manifest lookup misses.
pub const PLACEHOLDER_IMAGE: &str = "img/placeholder.png";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageManifest {
    pub cover: Option<String>,
    pub location: Option<String>,
    pub map: Option<String>,
    pub menu: HashMap<String, String>,
    pub participants: HashMap<String, String>,
}

#[derive(Deserialize)]
struct ImageEnvelope {
    images: ImageManifest,
}

/// Lowercase the name and replace every space with `_`.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

impl ImageManifest {
    /// Parse `images.json`, which wraps the manifest in an `images` object.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] when the envelope or manifest is malformed.
    pub fn from_json(resource: &str, json: &str) -> Result<Self, LoadError> {
        serde_json::from_str::<ImageEnvelope>(json)
            .map(|envelope| envelope.images)
            .map_err(|e| LoadError::json(resource, e))
    }

    #[must_use]
    pub fn menu_image(&self, name: &str) -> &str {
        lookup(&self.menu, name)
    }

    #[must_use]
    pub fn participant_image(&self, name: &str) -> &str {
        lookup(&self.participants, name)
    }

    #[must_use]
    pub fn has_menu_image(&self, name: &str) -> bool {
        self.menu.contains_key(&normalize_name(name))
    }

    #[must_use]
    pub fn cover_image(&self) -> &str {
        self.cover.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Map picture for the location block; older manifests call it `location`.
    #[must_use]
    pub fn map_image(&self) -> &str {
        self.map
            .as_deref()
            .or(self.location.as_deref())
            .unwrap_or(PLACEHOLDER_IMAGE)
    }
}

fn lookup<'a>(table: &'a HashMap<String, String>, name: &str) -> &'a str {
    table
        .get(&normalize_name(name))
        .map_or(PLACEHOLDER_IMAGE, String::as_str)
}

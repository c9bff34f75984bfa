//! Item records displayed on the shelf.

use serde::Deserialize;

/// A single displayable entry: a book or CD on the shelf.
///
/// Items are supplied externally (see [`crate::catalog`]) and are never
/// mutated by the widget. Only `name` is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Short quote shown in the detail panel.
    #[serde(default)]
    pub quote: Option<String>,
    /// Longer descriptive text.
    #[serde(default)]
    pub summary: Option<String>,
    /// Category label.
    #[serde(default)]
    pub category: Option<String>,
    /// External link for further reading.
    #[serde(default)]
    pub link: Option<String>,
    /// Cover image file name, resolved against the configured image
    /// directory. Existence is not checked before loading.
    #[serde(default)]
    pub image_file: Option<String>,
}

impl Item {
    /// Create an item with only a name. Optional fields start empty.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quote: None,
            summary: None,
            category: None,
            link: None,
            image_file: None,
        }
    }

    /// Initials used for the cover fallback.
    ///
    /// First letter of the first word plus first letter of the last word;
    /// a single word yields its first two letters. Always uppercased.
    pub fn initials(&self) -> String {
        let words: Vec<&str> = self.name.split_whitespace().collect();
        let raw: String = match words.as_slice() {
            [] => String::new(),
            [only] => only.chars().take(2).collect(),
            [first, .., last] => first
                .chars()
                .take(1)
                .chain(last.chars().take(1))
                .collect(),
        };
        raw.to_uppercase()
    }

    /// Path of the cover image under `image_dir`, if the item has one.
    pub fn cover_path(&self, image_dir: &str) -> Option<String> {
        self.image_file
            .as_ref()
            .map(|file| format!("{}/{}", image_dir.trim_end_matches('/'), file))
    }
}

//! Catalog loading: the externally supplied item list.

use crate::item::Item;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// An ordered, read-only list of items.
///
/// The widget indexes into this list; it never reorders or mutates it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Wrap an already-built item list.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Parse a catalog from a JSON array of items.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<Item> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self { items })
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CatalogError::NotFound(path.display().to_string()));
        }

        let json = fs::read_to_string(path)
            .map_err(|e| CatalogError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        let items: Vec<Item> = serde_json::from_str(&json)
            .map_err(|e| CatalogError::Parse(format!("Failed to parse {}: {}", path.display(), e)))?;
        Ok(Self { items })
    }

    /// All items, in shelf order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"name": "Alpha", "image_file": "a.png"},
            {"name": "Bea Smith", "quote": "hello", "link": "https://example.org"}
        ]"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().name, "Alpha");
        assert_eq!(catalog.get(1).unwrap().quote.as_deref(), Some("hello"));
        assert!(catalog.get(1).unwrap().summary.is_none());
    }

    #[test]
    fn test_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"[{{"name": "Alpha"}}]"#).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Catalog::load(dir.path().join("nope.json"));
        assert!(matches!(result, Err(CatalogError::NotFound(_))));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = Catalog::load(&path);
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_empty_array_is_valid() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
    }
}

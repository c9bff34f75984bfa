//! Detail panel content derived from the active item.

use crate::item::Item;

/// Prompt shown in the panel when nothing is selected.
pub const IDLE_PROMPT: &str = "Pick an item from the shelf to see its details.";

/// Label used for the external link fragment.
pub const LINK_LABEL: &str = "More info";

/// One paragraph of the detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailFragment {
    /// Quoted line, rendered in italics.
    Quote(String),
    /// Free-form summary paragraph.
    Summary(String),
    /// Category label.
    Category(String),
    /// External link URL.
    Link(String),
}

/// Everything the detail panel renders for one item.
///
/// Rebuilt from scratch on every selection, so no content from a
/// previously selected item can linger. Absent fields produce no
/// fragment at all rather than an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailContent {
    /// Panel title.
    pub title: String,
    /// Present fields only, in display order.
    pub fragments: Vec<DetailFragment>,
    /// Initials for the cover fallback.
    pub initials: String,
    /// Cover image file name, if the item has one.
    pub image_file: Option<String>,
}

impl DetailContent {
    /// Build the panel content for `item`.
    pub fn from_item(item: &Item) -> Self {
        let mut fragments = Vec::new();

        if let Some(quote) = &item.quote {
            fragments.push(DetailFragment::Quote(quote.clone()));
        }
        if let Some(summary) = &item.summary {
            fragments.push(DetailFragment::Summary(summary.clone()));
        }
        if let Some(category) = &item.category {
            fragments.push(DetailFragment::Category(category.clone()));
        }
        if let Some(link) = &item.link {
            fragments.push(DetailFragment::Link(link.clone()));
        }

        Self {
            title: item.name.clone(),
            fragments,
            initials: item.initials(),
            image_file: item.image_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_produce_no_fragments() {
        let content = DetailContent::from_item(&Item::named("Alpha"));
        assert_eq!(content.title, "Alpha");
        assert!(content.fragments.is_empty());
        assert!(content.image_file.is_none());
    }

    #[test]
    fn test_present_fields_in_display_order() {
        let item = Item {
            quote: Some("a quote".into()),
            summary: Some("a summary".into()),
            category: Some("fiction".into()),
            link: Some("https://example.org".into()),
            ..Item::named("Bea Smith")
        };

        let content = DetailContent::from_item(&item);
        assert_eq!(
            content.fragments,
            vec![
                DetailFragment::Quote("a quote".into()),
                DetailFragment::Summary("a summary".into()),
                DetailFragment::Category("fiction".into()),
                DetailFragment::Link("https://example.org".into()),
            ]
        );
    }

    #[test]
    fn test_partial_fields() {
        let item = Item {
            summary: Some("only a summary".into()),
            ..Item::named("Solo")
        };

        let content = DetailContent::from_item(&item);
        assert_eq!(
            content.fragments,
            vec![DetailFragment::Summary("only a summary".into())]
        );
    }

    #[test]
    fn test_initials_carried_for_fallback() {
        let content = DetailContent::from_item(&Item::named("Bea Smith"));
        assert_eq!(content.initials, "BS");
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ColorParseError;

/// Unique, immutable identifier of a committed product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

impl Category {
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
        }
    }
}

/// A committed catalog entry. `price` stays numeric text the way the form
/// captured it; parsing happens in [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
    pub price: String,
    pub colors: Vec<String>,
    pub category: Category,
}

/// The in-progress, uncommitted record behind the create/edit form.
///
/// A draft never carries an identifier: the create workflow generates a
/// fresh one on commit, and the edit workflow re-uses the identifier of
/// the entry being edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: String,
    pub colors: Vec<String>,
    pub category: Category,
}

impl ProductDraft {
    /// Pre-populates a draft from an existing catalog entry (edit workflow).
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            price: product.price.clone(),
            colors: product.colors.clone(),
            category: product.category.clone(),
        }
    }
}

/// Parses a `#RRGGBB` color tag into its RGB components.
///
/// Color tags are plain strings throughout the model; the UI calls this
/// when it actually needs to paint a swatch.
pub fn parse_hex_rgb(tag: &str) -> Result<[u8; 3], ColorParseError> {
    let hex = tag
        .strip_prefix('#')
        .ok_or_else(|| ColorParseError::MissingHash {
            tag: tag.to_string(),
        })?;
    if hex.len() != 6 {
        return Err(ColorParseError::BadLength {
            tag: tag.to_string(),
        });
    }
    // Multibyte input must be rejected before byte-slicing the pairs.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::BadDigit {
            tag: tag.to_string(),
        });
    }
    let component = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError::BadDigit {
            tag: tag.to_string(),
        })
    };
    Ok([component(0..2)?, component(2..4)?, component(4..6)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn draft_from_product_copies_every_field_but_the_id() {
        let product = Product {
            id: ProductId::generate(),
            title: "Desk lamp".to_string(),
            description: "An adjustable desk lamp with a warm bulb".to_string(),
            image_url: "https://images.example/lamp.png".to_string(),
            price: "24.00".to_string(),
            colors: vec!["#2563EB".to_string()],
            category: Category::new("Lighting", "https://images.example/cat-lighting.png"),
        };

        let draft = ProductDraft::from_product(&product);
        assert_eq!(draft.title, product.title);
        assert_eq!(draft.description, product.description);
        assert_eq!(draft.image_url, product.image_url);
        assert_eq!(draft.price, product.price);
        assert_eq!(draft.colors, product.colors);
        assert_eq!(draft.category, product.category);
    }

    #[test]
    fn product_serializes_with_source_field_spelling() {
        let product = Product {
            id: ProductId::generate(),
            title: "Chair".to_string(),
            description: "A comfortable chair".to_string(),
            image_url: "https://x.test/a.png".to_string(),
            price: "49.99".to_string(),
            colors: vec![],
            category: Category::new("Furniture", "https://x.test/c.png"),
        };

        let json = serde_json::to_value(&product).expect("serialize");
        assert!(json.get("imageURL").is_some());
        assert!(json["category"].get("imageURL").is_some());
    }

    #[test]
    fn parses_well_formed_hex_tags() {
        assert_eq!(parse_hex_rgb("#A855F7").expect("parse"), [0xA8, 0x55, 0xF7]);
        assert_eq!(parse_hex_rgb("#000000").expect("parse"), [0, 0, 0]);
    }

    #[test]
    fn rejects_malformed_hex_tags() {
        assert!(matches!(
            parse_hex_rgb("A855F7"),
            Err(ColorParseError::MissingHash { .. })
        ));
        assert!(matches!(
            parse_hex_rgb("#FFF"),
            Err(ColorParseError::BadLength { .. })
        ));
        assert!(matches!(
            parse_hex_rgb("#GGGGGG"),
            Err(ColorParseError::BadDigit { .. })
        ));
    }

    #[test]
    fn rejects_multibyte_tags_without_panicking() {
        // Six bytes but not six hex digits; slicing these by byte index
        // would split a char in the middle.
        assert!(matches!(
            parse_hex_rgb("#\u{20AC}abc"),
            Err(ColorParseError::BadDigit { .. })
        ));
        assert!(matches!(
            parse_hex_rgb("#ééé"),
            Err(ColorParseError::BadDigit { .. })
        ));
    }
}

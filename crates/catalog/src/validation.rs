//! Submit-time validation for the product form.
//!
//! Validation failures are data, not errors: every submit recomputes one
//! message per field, and an empty message means the field passed. The UI
//! clears a field's message again as soon as the field is edited.

use url::Url;

use crate::domain::ProductDraft;
use crate::error::PriceError;

pub const TITLE_MIN: usize = 3;
pub const TITLE_MAX: usize = 80;
pub const DESCRIPTION_MIN: usize = 10;
pub const DESCRIPTION_MAX: usize = 900;

/// The editable, validated form fields. Field updates in the reducer go
/// through this enum instead of dynamic name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    ImageUrl,
    Price,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Title,
        Field::Description,
        Field::ImageUrl,
        Field::Price,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Product Title",
            Field::Description => "Product Description",
            Field::ImageUrl => "Product Image URL",
            Field::Price => "Product Price",
        }
    }
}

impl ProductDraft {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::ImageUrl => &self.image_url,
            Field::Price => &self.price,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Title => self.title = value,
            Field::Description => self.description = value,
            Field::ImageUrl => self.image_url = value,
            Field::Price => self.price = value,
        }
    }
}

/// One human-readable message per validated field; empty string = valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: String,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::ImageUrl => &self.image_url,
            Field::Price => &self.price,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Title => self.title.clear(),
            Field::Description => self.description.clear(),
            Field::ImageUrl => self.image_url.clear(),
            Field::Price => self.price.clear(),
        }
    }

    pub fn has_any(&self) -> bool {
        Field::ALL.iter().any(|field| !self.get(*field).is_empty())
    }
}

/// Parses a price field into a non-negative amount.
pub fn parse_price(raw: &str) -> Result<f64, PriceError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PriceError::Empty);
    }
    let value: f64 = trimmed.parse().map_err(|_| PriceError::NotANumber {
        raw: trimmed.to_string(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(PriceError::Negative {
            raw: trimmed.to_string(),
        });
    }
    Ok(value)
}

fn is_url_shaped(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => matches!(url.scheme(), "http" | "https" | "ftp"),
        Err(_) => false,
    }
}

/// Checks every validated field of a draft. Deterministic, never fails.
pub fn validate_draft(draft: &ProductDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let title = draft.title.trim();
    if title.is_empty() || title.chars().count() < TITLE_MIN || title.chars().count() > TITLE_MAX {
        errors.title = format!(
            "Product title must be between {TITLE_MIN} and {TITLE_MAX} characters!"
        );
    }

    let description = draft.description.trim();
    let description_len = description.chars().count();
    if description.is_empty()
        || description_len < DESCRIPTION_MIN
        || description_len > DESCRIPTION_MAX
    {
        errors.description = format!(
            "Product description must be between {DESCRIPTION_MIN} and {DESCRIPTION_MAX} characters!"
        );
    }

    if draft.image_url.trim().is_empty() || !is_url_shaped(draft.image_url.trim()) {
        errors.image_url = "Valid product image URL is required!".to_string();
    }

    if let Err(err) = parse_price(&draft.price) {
        errors.price = match err {
            PriceError::Empty | PriceError::NotANumber { .. } => {
                "Valid product price is required!".to_string()
            }
            PriceError::Negative { .. } => "Product price must not be negative!".to_string(),
        };
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            title: "Chair".to_string(),
            description: "A sturdy chair for long desk sessions".to_string(),
            image_url: "https://x.test/a.png".to_string(),
            price: "49.99".to_string(),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn accepts_a_fully_valid_draft() {
        let errors = validate_draft(&valid_draft());
        assert!(!errors.has_any(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn flags_empty_title() {
        let mut draft = valid_draft();
        draft.title = String::new();
        let errors = validate_draft(&draft);
        assert!(!errors.title.is_empty());
    }

    #[test]
    fn flags_title_outside_length_bounds() {
        let mut draft = valid_draft();
        draft.title = "ab".to_string();
        assert!(!validate_draft(&draft).title.is_empty());

        draft.title = "x".repeat(TITLE_MAX + 1);
        assert!(!validate_draft(&draft).title.is_empty());

        draft.title = "x".repeat(TITLE_MAX);
        assert!(validate_draft(&draft).title.is_empty());
    }

    #[test]
    fn flags_short_description() {
        let mut draft = valid_draft();
        draft.description = "too short".to_string();
        let errors = validate_draft(&draft);
        assert!(!errors.description.is_empty());
    }

    #[test]
    fn flags_non_url_image_field() {
        let mut draft = valid_draft();
        draft.image_url = "not a url".to_string();
        assert!(!validate_draft(&draft).image_url.is_empty());

        draft.image_url = "ftp://files.test/a.png".to_string();
        assert!(validate_draft(&draft).image_url.is_empty());

        draft.image_url = "file:///etc/passwd".to_string();
        assert!(!validate_draft(&draft).image_url.is_empty());
    }

    #[test]
    fn flags_negative_and_non_numeric_prices() {
        let mut draft = valid_draft();
        draft.price = "-5".to_string();
        assert!(!validate_draft(&draft).price.is_empty());

        draft.price = "forty".to_string();
        assert!(!validate_draft(&draft).price.is_empty());

        draft.price = String::new();
        assert!(!validate_draft(&draft).price.is_empty());

        draft.price = "0".to_string();
        assert!(validate_draft(&draft).price.is_empty());
    }

    #[test]
    fn parse_price_distinguishes_failure_reasons() {
        assert_eq!(parse_price("  "), Err(PriceError::Empty));
        assert!(matches!(
            parse_price("4x"),
            Err(PriceError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_price("-0.01"),
            Err(PriceError::Negative { .. })
        ));
        assert_eq!(parse_price(" 12.5 "), Ok(12.5));
    }

    #[test]
    fn clearing_one_field_leaves_other_messages_alone() {
        let mut errors = FieldErrors {
            title: "bad title".to_string(),
            price: "bad price".to_string(),
            ..FieldErrors::default()
        };
        errors.clear(Field::Title);
        assert!(errors.title.is_empty());
        assert_eq!(errors.price, "bad price");
        assert!(errors.has_any());
    }
}
